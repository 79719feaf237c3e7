//! File system utilities.

use crate::Result;
use std::path::{Component, Path, PathBuf};

/// Extension used for extracted stills.
const STILL_EXTENSION: &str = "jpg";

/// Create a directory and all parent directories.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a disc image based on extension.
pub fn is_disc_image(path: &Path) -> bool {
    const IMAGE_EXTENSIONS: &[&str] = &["iso", "img"];

    get_extension(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Unique path for a new still inside `dir`.
///
/// Names combine a millisecond UTC timestamp with a random UUID so that
/// back-to-back runs never reuse a name.
pub fn unique_still_path(dir: &Path) -> PathBuf {
    let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
    let id = uuid::Uuid::new_v4().simple();
    dir.join(format!("still-{}-{}.{}", stamp, id, STILL_EXTENSION))
}

/// Convert a path into a `file://` URI with percent-encoded segments.
pub fn file_uri(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut uri = String::from("file://");
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => {
                uri.push('/');
                uri.push_str(&prefix.as_os_str().to_string_lossy());
            }
            Component::Normal(name) => {
                uri.push('/');
                uri.push_str(&urlencoding::encode(&name.to_string_lossy()));
            }
            Component::RootDir | Component::CurDir | Component::ParentDir => {}
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        assert_eq!(get_extension(Path::new("VTS_01_1.VOB")), Some("vob".to_string()));
        assert_eq!(get_extension(Path::new("/a/b/00000.m2ts")), Some("m2ts".to_string()));
        assert_eq!(get_extension(Path::new("/a/b/README")), None);
    }

    #[test]
    fn test_is_disc_image() {
        assert!(is_disc_image(Path::new("/movies/Alien.iso")));
        assert!(is_disc_image(Path::new("/movies/Alien.ISO")));
        assert!(!is_disc_image(Path::new("/movies/Alien.mkv")));
    }

    #[test]
    fn test_unique_still_path() {
        let dir = Path::new("/tmp/stills");
        let a = unique_still_path(dir);
        let b = unique_still_path(dir);
        assert_ne!(a, b);
        assert!(a.starts_with(dir));
        assert_eq!(get_extension(&a), Some("jpg".to_string()));
    }

    #[test]
    fn test_file_uri_encodes_segments() {
        assert_eq!(
            file_uri(Path::new("/tmp/my stills/still 1.jpg")),
            "file:///tmp/my%20stills/still%201.jpg"
        );
    }
}
