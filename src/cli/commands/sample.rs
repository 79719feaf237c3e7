//! Sample command implementation.
//!
//! Probes the source, runs the still sampler on a blocking worker and
//! prints or saves the resulting artwork candidates.

use crate::core::disc::FsSegmentEnumerator;
use crate::core::sampler::StillSampler;
use crate::models::artwork::{ArtworkCandidate, ArtworkType};
use crate::models::config::Config;
use crate::models::sampling::SamplingRequest;
use crate::services::ffmpeg::{Ffmpeg, FrameExtractor};
use crate::services::ffprobe::Ffprobe;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Command line overrides for one sample run.
#[derive(Debug, Default)]
pub struct SampleOptions {
    pub count: Option<i32>,
    pub start: Option<i32>,
    pub end: Option<i32>,
    pub artwork_type: String,
    pub no_background: bool,
    pub no_thumb: bool,
    pub scratch_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Build the sampling request from config plus command line overrides.
pub fn build_request(config: &Config, options: &SampleOptions) -> Result<SamplingRequest> {
    let artwork_type: ArtworkType = options.artwork_type.parse()?;
    let mut request = SamplingRequest::from_config(&config.stills, artwork_type);

    if let Some(count) = options.count {
        request.count = count;
    }
    if let Some(start) = options.start {
        request.start = start;
    }
    if let Some(end) = options.end {
        request.end = end;
    }
    if options.no_background {
        request.background_enabled = false;
    }
    if options.no_thumb {
        request.thumb_enabled = false;
    }

    Ok(request)
}

/// Execute the sample command.
pub async fn sample(path: &Path, options: SampleOptions, config: &Config) -> Result<()> {
    println!("{}", "🎞️  Sampling stills...".bold().cyan());
    println!();

    let request = build_request(config, &options)?;
    let scratch_dir = options
        .scratch_dir
        .clone()
        .unwrap_or_else(|| config.scratch_dir());

    let ffmpeg = Ffmpeg::new(&config.ffmpeg.ffmpeg);
    if !ffmpeg.is_available() {
        return Err(Error::CapabilityUnavailable);
    }

    let ffprobe = Ffprobe::new(&config.ffmpeg.ffprobe);
    let source = ffprobe.probe_source(path, &FsSegmentEnumerator)?;

    println!("  {} {}", "Source:".bold(), source.path.display());
    println!("  {} {}", "Layout:".bold(), source.layout);
    println!("  {} {}s", "Duration:".bold(), source.duration);
    println!("  {} {}", "Stills:".bold(), request.count);
    println!("  {} {}%-{}%", "Range:".bold(), request.start, request.end);
    println!("  {} {}", "Type:".bold(), request.artwork_type);
    println!("  {} {}", "Scratch:".bold(), scratch_dir.display());
    println!();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Extracting stills...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let sampler = StillSampler::new(
        ffmpeg,
        FsSegmentEnumerator,
        scratch_dir,
    );
    let candidates = tokio::task::spawn_blocking(move || sampler.sample(&source, &request))
        .await
        .map_err(|e| Error::other(format!("Sampling task failed: {}", e)))??;

    pb.finish_and_clear();

    print_candidates(&candidates);

    if let Some(output) = options.output.as_deref() {
        let json = serde_json::to_string_pretty(&candidates)?;
        std::fs::write(output, json)?;
        println!();
        println!("📄 Candidates saved to: {}", output.display());
    }

    Ok(())
}

fn print_candidates(candidates: &[ArtworkCandidate]) {
    if candidates.is_empty() {
        println!("{}", "No artwork candidates produced.".yellow());
        return;
    }

    println!("{}", "🖼️  Artwork Candidates".bold().green());
    for candidate in candidates {
        println!(
            "  {:<10} {:>9.3}s  {}x{} ({:?})  {}",
            candidate.role.to_string(),
            candidate.timestamp,
            candidate.width,
            candidate.height,
            candidate.size,
            candidate.url
        );
    }
    println!();
    println!("  {} {}", "Total:".bold(), candidates.len());
}
