//! FFmpeg service for extracting still frames.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Capability to write a single frame of a video to an image file.
pub trait FrameExtractor {
    /// Whether the extraction tool is configured and runnable.
    fn is_available(&self) -> bool;

    /// Write the frame at `seconds` of `source` to `target`.
    ///
    /// Implementations log their own failures.
    fn extract_still(&self, source: &Path, target: &Path, seconds: f64) -> Result<()>;
}

/// Frame extractor backed by the `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    binary: PathBuf,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Ffmpeg {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Get ffmpeg version.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.binary).arg("-version").output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let first_line = stdout.lines().next().unwrap_or("unknown");

        Ok(first_line.to_string())
    }
}

impl FrameExtractor for Ffmpeg {
    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn extract_still(&self, source: &Path, target: &Path, seconds: f64) -> Result<()> {
        let output = Command::new(&self.binary)
            .args(["-y", "-v", "error", "-ss"])
            .arg(format_seconds(seconds))
            .arg("-i")
            .arg(source)
            .args(["-frames:v", "1", "-q:v", "2"])
            .arg(target)
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to run ffmpeg for {:?}: {}", source, e);
                return Err(Error::ExtractionFailed(e.to_string()));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(
                "ffmpeg could not extract still at {}s from {:?}: {}",
                format_seconds(seconds),
                source,
                stderr.trim()
            );
            return Err(Error::ExtractionFailed(format!(
                "{:?} at {}s",
                source,
                format_seconds(seconds)
            )));
        }

        // Seeking past the last keyframe exits cleanly but writes nothing
        if !target.is_file() {
            tracing::warn!(
                "ffmpeg produced no image at {}s from {:?}",
                format_seconds(seconds),
                source
            );
            return Err(Error::ExtractionFailed(format!(
                "no output written to {:?}",
                target
            )));
        }

        tracing::debug!("Extracted still {:?} at {}s", target, format_seconds(seconds));
        Ok(())
    }
}

/// Seek position as ffmpeg expects it, millisecond precision.
fn format_seconds(seconds: f64) -> String {
    format!("{:.3}", seconds)
}
