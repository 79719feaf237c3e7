//! FFmpeg preflight check.

use super::CheckResult;
use crate::models::config::Config;
use crate::services::ffmpeg::{Ffmpeg, FrameExtractor};

/// Check if ffmpeg is installed.
pub fn check(config: &Config) -> CheckResult {
    let ffmpeg = Ffmpeg::new(&config.ffmpeg.ffmpeg);
    if ffmpeg.is_available() {
        match ffmpeg.version() {
            Ok(version) => CheckResult::ok("ffmpeg", &format!("installed ({})", version)),
            Err(_) => CheckResult::ok("ffmpeg", "installed"),
        }
    } else {
        CheckResult::fail(
            "ffmpeg",
            "not found",
            "Install FFmpeg (sudo apt install ffmpeg) or set FFMPEG_PATH",
        )
    }
}
