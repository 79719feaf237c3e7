//! FFprobe preflight check.

use super::CheckResult;
use crate::models::config::Config;
use crate::services::ffprobe::Ffprobe;

/// Check if ffprobe is installed.
pub fn check(config: &Config) -> CheckResult {
    let ffprobe = Ffprobe::new(&config.ffmpeg.ffprobe);
    if ffprobe.is_installed() {
        match ffprobe.get_version() {
            Ok(version) => CheckResult::ok("ffprobe", &format!("installed ({})", version)),
            Err(_) => CheckResult::ok("ffprobe", "installed"),
        }
    } else {
        CheckResult::fail(
            "ffprobe",
            "not found",
            "Install FFmpeg (sudo apt install ffmpeg) or set FFPROBE_PATH",
        )
    }
}
