//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Still sampling configuration.
    pub stills: StillsConfig,
    /// FFmpeg tool configuration.
    pub ffmpeg: FfmpegConfig,
    /// Scratch directory for extracted stills.
    pub scratch_dir: Option<PathBuf>,
}

/// Still sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StillsConfig {
    /// Number of stills to take.
    pub count: i32,
    /// Start of the sampled range, percent of runtime.
    pub start: i32,
    /// End of the sampled range, percent of runtime.
    pub end: i32,
    /// Produce background/fanart candidates.
    pub background: bool,
    /// Produce thumb candidates.
    pub thumb: bool,
}

/// FFmpeg tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FfmpegConfig {
    /// ffmpeg binary.
    pub ffmpeg: PathBuf,
    /// ffprobe binary.
    pub ffprobe: PathBuf,
}

impl Default for StillsConfig {
    fn default() -> Self {
        Self {
            count: 10,
            start: 5,
            end: 95,
            background: true,
            thumb: true,
        }
    }
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            ffmpeg: std::env::var_os("FFMPEG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("ffmpeg")),
            ffprobe: std::env::var_os("FFPROBE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("ffprobe")),
        }
    }
}

impl Config {
    /// Directory stills are written to.
    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("media_stills"))
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_stills")
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
    }

    Config::default()
}

/// Load configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.stills.count, 10);
        assert_eq!(config.stills.start, 5);
        assert_eq!(config.stills.end, 95);
        assert!(config.stills.background);
        assert!(config.stills.thumb);
        assert!(config.scratch_dir.is_none());
        assert!(config.scratch_dir().ends_with("media_stills"));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            scratch_dir = "/var/tmp/stills"

            [stills]
            count = 4
            thumb = false
            "#,
        )
        .unwrap();

        assert_eq!(config.stills.count, 4);
        assert_eq!(config.stills.start, 5);
        assert!(!config.stills.thumb);
        assert!(config.stills.background);
        assert_eq!(config.scratch_dir(), PathBuf::from("/var/tmp/stills"));
    }
}
