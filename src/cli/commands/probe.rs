//! Probe command implementation.

use crate::core::disc::FsSegmentEnumerator;
use crate::models::config::Config;
use crate::services::ffprobe::Ffprobe;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Resolve a path and print the resulting video source.
pub async fn probe(path: &Path, config: &Config) -> Result<()> {
    let ffprobe = Ffprobe::new(&config.ffmpeg.ffprobe);
    let source = ffprobe.probe_source(path, &FsSegmentEnumerator)?;

    println!("{}", "🔍 Video source".bold().cyan());
    println!("  {} {}", "Path:".bold(), source.path.display());
    println!("  {} {}", "Layout:".bold(), source.layout);
    println!("  {} {}s", "Duration:".bold(), source.duration);
    println!("  {} {}x{}", "Size:".bold(), source.width, source.height);
    println!();
    println!("{}", serde_json::to_string_pretty(&source)?);

    Ok(())
}
