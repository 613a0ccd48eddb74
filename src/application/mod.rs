//! Application layer orchestrating domain operations.

pub mod services;
