//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions of disc segment files that can be sampled.
pub const DISC_VIDEO_EXTENSIONS: &[&str] = &["vob", "m2ts", "evo"];

/// How a video source is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLayout {
    /// A single playable file.
    File,
    /// An optical-disc folder structure (VIDEO_TS, BDMV, HVDVD_TS).
    DiscFolder,
    /// An ISO-style disc image; not readable by the sampler.
    DiscImage,
}

impl std::fmt::Display for SourceLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLayout::File => write!(f, "file"),
            SourceLayout::DiscFolder => write!(f, "disc folder"),
            SourceLayout::DiscImage => write!(f, "disc image"),
        }
    }
}

/// One playable media unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSource {
    /// Path to the file, or to the disc folder.
    pub path: PathBuf,
    /// Total duration in seconds.
    pub duration: u64,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// File or disc layout.
    pub layout: SourceLayout,
}

impl VideoSource {
    /// Create a single-file source.
    pub fn file(path: impl Into<PathBuf>, duration: u64, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            duration,
            width,
            height,
            layout: SourceLayout::File,
        }
    }

    /// Create a disc-folder source.
    pub fn disc(path: impl Into<PathBuf>, duration: u64, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            duration,
            width,
            height,
            layout: SourceLayout::DiscFolder,
        }
    }

    pub fn is_disc(&self) -> bool {
        self.layout == SourceLayout::DiscFolder
    }

    pub fn is_disc_image(&self) -> bool {
        self.layout == SourceLayout::DiscImage
    }
}

/// One segment file of a disc-structured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscSegment {
    /// Path to the segment file.
    pub path: PathBuf,
    /// Lowercase file extension, empty if none.
    pub extension: String,
}

impl DiscSegment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = crate::utils::fs::get_extension(&path).unwrap_or_default();
        Self { path, extension }
    }

    /// Whether this segment is a recognized disc video container.
    pub fn is_disc_video(&self) -> bool {
        is_disc_video_extension(&self.extension)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Case-insensitive exact match against [`DISC_VIDEO_EXTENSIONS`].
pub fn is_disc_video_extension(ext: &str) -> bool {
    DISC_VIDEO_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_video_extension() {
        assert!(is_disc_video_extension("vob"));
        assert!(is_disc_video_extension("VOB"));
        assert!(is_disc_video_extension("M2ts"));
        assert!(is_disc_video_extension("evo"));
        assert!(!is_disc_video_extension("mkv"));
        assert!(!is_disc_video_extension("ifo"));
        assert!(!is_disc_video_extension("vobx"));
        assert!(!is_disc_video_extension(""));
    }

    #[test]
    fn test_layout_predicates() {
        let file = VideoSource::file("/m/movie.mkv", 60, 1920, 1080);
        assert!(!file.is_disc());
        assert!(!file.is_disc_image());

        let disc = VideoSource::disc("/m/DVD", 60, 720, 576);
        assert!(disc.is_disc());
        assert!(!disc.is_disc_image());
    }

    #[test]
    fn test_segment_extension_is_lowercased() {
        let segment = DiscSegment::new("/disc/VIDEO_TS/VTS_01_1.VOB");
        assert_eq!(segment.extension, "vob");
        assert!(segment.is_disc_video());

        let segment = DiscSegment::new("/disc/VIDEO_TS/VTS_01_0.IFO");
        assert!(!segment.is_disc_video());
    }
}
