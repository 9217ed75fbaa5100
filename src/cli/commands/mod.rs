//! CLI command implementations.

pub mod analyze;
pub mod strategies;
pub mod validate;
