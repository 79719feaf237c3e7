//! Disc source handling.
//!
//! Detects optical-disc folder structures and lists the segment files
//! a disc is made of.

use crate::models::media::{DiscSegment, SourceLayout, VideoSource};
use crate::utils::fs;
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Folder names that mark an optical-disc structure.
const DISC_FOLDERS: &[&str] = &["VIDEO_TS", "BDMV", "HVDVD_TS"];

/// Lists the segment files of a disc-structured source.
pub trait SegmentEnumerator {
    /// Segment files of `source`, ordered by path.
    fn list_segments(&self, source: &VideoSource) -> Result<Vec<DiscSegment>>;
}

impl<T: SegmentEnumerator + ?Sized> SegmentEnumerator for &T {
    fn list_segments(&self, source: &VideoSource) -> Result<Vec<DiscSegment>> {
        (**self).list_segments(source)
    }
}

/// Enumerates disc segments by walking the disc folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSegmentEnumerator;

impl SegmentEnumerator for FsSegmentEnumerator {
    fn list_segments(&self, source: &VideoSource) -> Result<Vec<DiscSegment>> {
        let mut segments = Vec::new();

        let walker = WalkDir::new(&source.path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            // BDMV/BACKUP mirrors the real structure
            .filter_entry(|e| !(e.file_type().is_dir() && e.file_name().eq_ignore_ascii_case("BACKUP")));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                segments.push(DiscSegment::new(entry.path()));
            }
        }

        segments.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!("Found {} files in disc {:?}", segments.len(), source.path);
        Ok(segments)
    }
}

/// Keep only segments that are recognized disc video containers.
pub fn filter_playable(segments: Vec<DiscSegment>) -> Vec<DiscSegment> {
    segments.into_iter().filter(|s| s.is_disc_video()).collect()
}

/// Whether a directory name marks a disc structure.
fn is_disc_folder_name(name: &str) -> bool {
    DISC_FOLDERS.iter().any(|d| d.eq_ignore_ascii_case(name))
}

/// Determine the layout of a path.
///
/// Returns `None` for directories that are not disc structures.
pub fn detect_layout(path: &Path) -> Option<SourceLayout> {
    if path.is_file() {
        if fs::is_disc_image(path) {
            return Some(SourceLayout::DiscImage);
        }
        return Some(SourceLayout::File);
    }

    if !path.is_dir() {
        return None;
    }

    let own_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if is_disc_folder_name(&own_name) {
        return Some(SourceLayout::DiscFolder);
    }

    let has_disc_child = std::fs::read_dir(path)
        .map(|entries| {
            entries.filter_map(|e| e.ok()).any(|e| {
                e.path().is_dir() && is_disc_folder_name(&e.file_name().to_string_lossy())
            })
        })
        .unwrap_or(false);

    if has_disc_child {
        Some(SourceLayout::DiscFolder)
    } else {
        None
    }
}
