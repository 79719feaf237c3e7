//! FFprobe service for resolving video sources.

use crate::core::disc::{self, SegmentEnumerator};
use crate::models::media::{SourceLayout, VideoSource};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// FFprobe output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

/// FFprobe stream information.
#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: String,
    width: Option<u32>,
    height: Option<u32>,
}

/// FFprobe format information.
#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// Duration and frame size of one probed file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreamInfo {
    pub duration: f64,
    pub width: u32,
    pub height: u32,
}

/// Runs `ffprobe` against media files.
#[derive(Debug, Clone)]
pub struct Ffprobe {
    binary: PathBuf,
}

impl Default for Ffprobe {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl Ffprobe {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check if ffprobe is installed.
    pub fn is_installed(&self) -> bool {
        Command::new(&self.binary)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Get ffprobe version.
    pub fn get_version(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("-version")
            .output()
            .map_err(spawn_error)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let first_line = stdout.lines().next().unwrap_or("unknown");

        Ok(first_line.to_string())
    }

    /// Probe duration and frame size of a single file.
    pub fn stream_info(&self, path: &Path) -> Result<StreamInfo> {
        let output = Command::new(&self.binary)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output()
            .map_err(spawn_error)?;

        if !output.status.success() {
            return Err(Error::ProbeFailed(format!("ffprobe failed for: {:?}", path)));
        }

        parse_stream_info(&output.stdout)
    }

    /// Resolve `path` into a video source.
    ///
    /// Disc folders are probed segment by segment: durations are summed and
    /// the frame size comes from the first segment that reports one.
    pub fn probe_source<S: SegmentEnumerator>(
        &self,
        path: &Path,
        segments: &S,
    ) -> Result<VideoSource> {
        if !path.exists() {
            return Err(Error::SourceNotFound(path.display().to_string()));
        }

        let layout = disc::detect_layout(path)
            .ok_or_else(|| Error::SourceNotFound(format!("not a video source: {}", path.display())))?;

        match layout {
            SourceLayout::DiscImage => Ok(VideoSource {
                path: path.to_path_buf(),
                duration: 0,
                width: 0,
                height: 0,
                layout,
            }),
            SourceLayout::File => {
                let info = self.stream_info(path)?;
                Ok(VideoSource::file(
                    path,
                    info.duration as u64,
                    info.width,
                    info.height,
                ))
            }
            SourceLayout::DiscFolder => {
                let mut source = VideoSource::disc(path, 0, 0, 0);
                let mut total = 0.0;

                for segment in disc::filter_playable(segments.list_segments(&source)?) {
                    match self.stream_info(segment.path()) {
                        Ok(info) => {
                            total += info.duration;
                            if source.width == 0 {
                                source.width = info.width;
                                source.height = info.height;
                            }
                        }
                        Err(Error::FfprobeNotFound) => return Err(Error::FfprobeNotFound),
                        Err(e) => {
                            tracing::warn!("Failed to probe disc segment {:?}: {}", segment.path, e);
                        }
                    }
                }

                source.duration = total as u64;
                Ok(source)
            }
        }
    }
}

/// A binary that cannot be spawned at all means ffprobe is missing.
fn spawn_error(e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::NotFound {
        Error::FfprobeNotFound
    } else {
        Error::Io(e)
    }
}

/// Parse ffprobe JSON output.
fn parse_stream_info(json: &[u8]) -> Result<StreamInfo> {
    let ffprobe: FfprobeOutput = serde_json::from_slice(json)?;

    let duration = ffprobe
        .format
        .and_then(|f| f.duration)
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(0.0);

    let (width, height) = ffprobe
        .streams
        .iter()
        .find(|s| s.codec_type == "video")
        .map(|s| (s.width.unwrap_or(0), s.height.unwrap_or(0)))
        .unwrap_or((0, 0));

    Ok(StreamInfo {
        duration,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stream_info() {
        let json = br#"{
            "streams": [
                {"codec_type": "audio", "channels": 6},
                {"codec_type": "video", "width": 1920, "height": 800}
            ],
            "format": {"format_name": "matroska,webm", "duration": "7265.120000"}
        }"#;

        let info = parse_stream_info(json).unwrap();
        assert_eq!(info.width, 1920);
        assert_eq!(info.height, 800);
        assert!((info.duration - 7265.12).abs() < 1e-6);
    }

    #[test]
    fn test_parse_without_duration() {
        let json = br#"{"streams": [{"codec_type": "video", "width": 720, "height": 576}], "format": {}}"#;

        let info = parse_stream_info(json).unwrap();
        assert_eq!(info.duration, 0.0);
        assert_eq!(info.width, 720);
    }

    #[test]
    fn test_missing_binary_is_reported() {
        let ffprobe = Ffprobe::new("/nonexistent/bin/ffprobe");
        assert!(!ffprobe.is_installed());
        assert!(matches!(ffprobe.get_version(), Err(Error::FfprobeNotFound)));
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_stream_info(b"not json").is_err());
    }
}
