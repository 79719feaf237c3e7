//! Sampling request model.

use crate::models::artwork::{ArtworkRole, ArtworkType};
use crate::models::config::StillsConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lowest and highest percent of the runtime a still may be taken at.
const MIN_PERCENT: i32 = 1;
const MAX_PERCENT: i32 = 99;

/// Configuration for one sampling run, as supplied by the caller.
///
/// Values are kept raw: the single-file path clamps them via
/// [`SamplingRequest::normalized`], the disc path rejects bad values via
/// [`SamplingRequest::validated`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingRequest {
    /// Desired number of stills.
    pub count: i32,
    /// Start of the sampled range, percent of runtime.
    pub start: i32,
    /// End of the sampled range, percent of runtime.
    pub end: i32,
    /// Artwork type wanted for this call.
    pub artwork_type: ArtworkType,
    /// Provider toggle for background/fanart.
    pub background_enabled: bool,
    /// Provider toggle for thumbs.
    pub thumb_enabled: bool,
}

impl SamplingRequest {
    /// Build a request from the caller configuration.
    pub fn from_config(config: &StillsConfig, artwork_type: ArtworkType) -> Self {
        Self {
            count: config.count,
            start: config.start,
            end: config.end,
            artwork_type,
            background_enabled: config.background,
            thumb_enabled: config.thumb,
        }
    }

    /// Roles permitted by both the provider toggles and the requested type.
    pub fn roles(&self) -> Vec<ArtworkRole> {
        let mut roles = Vec::with_capacity(2);
        if self.background_enabled && self.artwork_type.wants(ArtworkRole::Background) {
            roles.push(ArtworkRole::Background);
        }
        if self.thumb_enabled && self.artwork_type.wants(ArtworkRole::Thumb) {
            roles.push(ArtworkRole::Thumb);
        }
        roles
    }

    /// Lenient window for single files: clamp, swap, coerce.
    pub fn normalized(&self) -> SamplingWindow {
        let mut start = self.start.clamp(MIN_PERCENT, MAX_PERCENT);
        let mut end = self.end.clamp(MIN_PERCENT, MAX_PERCENT);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        SamplingWindow {
            count: self.count.max(1) as u32,
            start: start as u32,
            end: end as u32,
        }
    }

    /// Strict window for disc sources: malformed values are rejected.
    pub fn validated(&self) -> Result<SamplingWindow> {
        if self.count <= 0 {
            return Err(Error::InvalidSamplingParameters(format!(
                "count must be positive, got {}",
                self.count
            )));
        }
        if self.start <= 0 {
            return Err(Error::InvalidSamplingParameters(format!(
                "start must be above 0%, got {}",
                self.start
            )));
        }
        if self.end >= 100 {
            return Err(Error::InvalidSamplingParameters(format!(
                "end must be below 100%, got {}",
                self.end
            )));
        }
        if self.start > self.end {
            return Err(Error::InvalidSamplingParameters(format!(
                "start ({}) is after end ({})",
                self.start, self.end
            )));
        }

        Ok(SamplingWindow {
            count: self.count as u32,
            start: self.start as u32,
            end: self.end as u32,
        })
    }
}

/// Normalized sampling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingWindow {
    pub count: u32,
    pub start: u32,
    pub end: u32,
}

impl SamplingWindow {
    /// Step between samples as a fraction of the duration.
    pub fn increment(&self) -> f64 {
        f64::from(self.end - self.start) / (100.0 * f64::from(self.count))
    }

    /// Start of the window as a fraction of the duration.
    pub fn start_fraction(&self) -> f64 {
        f64::from(self.start) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: i32, start: i32, end: i32) -> SamplingRequest {
        SamplingRequest {
            count,
            start,
            end,
            artwork_type: ArtworkType::All,
            background_enabled: true,
            thumb_enabled: true,
        }
    }

    #[test]
    fn test_normalized_clamps_and_swaps() {
        for start in -10..=110 {
            for end in [-5, 0, 1, 50, 99, 100, 150] {
                let window = request(3, start, end).normalized();
                assert!(window.start >= 1);
                assert!(window.start <= window.end);
                assert!(window.end <= 99);
            }
        }

        let window = request(3, 80, 20).normalized();
        assert_eq!((window.start, window.end), (20, 80));

        let window = request(3, 0, 100).normalized();
        assert_eq!((window.start, window.end), (1, 99));
    }

    #[test]
    fn test_normalized_coerces_count() {
        assert_eq!(request(0, 5, 95).normalized().count, 1);
        assert_eq!(request(-7, 5, 95).normalized().count, 1);
        assert_eq!(request(4, 5, 95).normalized().count, 4);
    }

    #[test]
    fn test_validated_rejects_bad_values() {
        assert!(matches!(
            request(0, 5, 95).validated(),
            Err(Error::InvalidSamplingParameters(_))
        ));
        assert!(matches!(
            request(4, 0, 95).validated(),
            Err(Error::InvalidSamplingParameters(_))
        ));
        assert!(matches!(
            request(4, 5, 100).validated(),
            Err(Error::InvalidSamplingParameters(_))
        ));
        assert!(matches!(
            request(4, 60, 40).validated(),
            Err(Error::InvalidSamplingParameters(_))
        ));

        let window = request(4, 5, 95).validated().unwrap();
        assert_eq!((window.count, window.start, window.end), (4, 5, 95));
    }

    #[test]
    fn test_increment() {
        let window = request(10, 5, 95).normalized();
        assert!((window.increment() - 0.09).abs() < 1e-12);
        assert!((window.start_fraction() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_roles_need_both_gates() {
        let mut req = request(1, 5, 95);
        assert_eq!(req.roles(), vec![ArtworkRole::Background, ArtworkRole::Thumb]);

        req.thumb_enabled = false;
        assert_eq!(req.roles(), vec![ArtworkRole::Background]);

        req.artwork_type = ArtworkType::Thumb;
        assert!(req.roles().is_empty());

        req.thumb_enabled = true;
        assert_eq!(req.roles(), vec![ArtworkRole::Thumb]);

        req.artwork_type = ArtworkType::Poster;
        assert!(req.roles().is_empty());
    }
}
