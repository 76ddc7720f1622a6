//! Command integration tests

pub mod config;
pub mod pure;
pub mod timing;
