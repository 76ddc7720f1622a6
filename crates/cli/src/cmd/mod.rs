//! CLI command implementations

pub mod calc;
pub mod check;
pub mod config;
pub mod date;
pub mod random;
pub mod text;
pub mod timing;
pub mod version;
