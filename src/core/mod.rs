//! Core business logic modules.

pub mod disc;
pub mod sampler;
pub mod timestamps;
