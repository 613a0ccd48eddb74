//! HTTP middleware for the API.

pub mod tracing;
