//! CLI command implementations.

pub mod check;
pub mod probe;
pub mod sample;
