//! Media Stills Library
//!
//! Extracts still frames from movies with FFmpeg and turns them into
//! background/fanart and thumb artwork candidates.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
