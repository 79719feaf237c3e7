//! Data models.

pub mod artwork;
pub mod config;
pub mod media;
pub mod sampling;
