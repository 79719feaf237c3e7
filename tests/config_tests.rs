//! Integration tests for configuration loading.

use media_stills::models::artwork::ArtworkType;
use media_stills::models::config::load_config_from;
use media_stills::models::sampling::SamplingRequest;
use media_stills::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
scratch_dir = "/srv/stills"

[stills]
count = 3
start = 20
end = 80
background = false

[ffmpeg]
ffmpeg = "/opt/ffmpeg/bin/ffmpeg"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.stills.count, 3);
    assert_eq!(config.ffmpeg.ffmpeg.to_string_lossy(), "/opt/ffmpeg/bin/ffmpeg");
    assert_eq!(config.scratch_dir().to_string_lossy(), "/srv/stills");

    let request = SamplingRequest::from_config(&config.stills, ArtworkType::All);
    assert_eq!((request.count, request.start, request.end), (3, 20, 80));
    assert!(!request.background_enabled);
    assert!(request.thumb_enabled);
}

#[test]
fn test_load_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[stills]\ncount = \"many\"\n").unwrap();

    assert!(matches!(load_config_from(&path), Err(Error::Config(_))));
}

#[test]
fn test_load_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(&temp_dir.path().join("nope.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}
