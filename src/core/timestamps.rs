//! Timestamp sampling.
//!
//! Decides at which seconds of a video stills are taken. Single files are
//! sampled across the configured window with random jitter so repeated
//! runs give different frames; disc segments are sampled without jitter.

use crate::models::sampling::SamplingWindow;
use rand::Rng;

/// Un-jittered timestamp of sample `index`.
pub fn base_timestamp(duration: f64, window: &SamplingWindow, index: u32) -> f64 {
    duration * (window.start_fraction() + f64::from(index) * window.increment())
}

/// Shift `base` by up to half a step either way.
///
/// Falls back to `base` when the shifted value leaves `(0, duration]`.
pub fn jitter<R: Rng>(base: f64, duration: f64, increment: f64, rng: &mut R) -> f64 {
    let offset = rng.gen_range(-0.5_f64..=0.5) * increment * duration;
    let jittered = base + offset;
    if jittered > 0.0 && jittered <= duration {
        jittered
    } else {
        base
    }
}

/// Timestamps for a single file.
pub fn single_file_timestamps<R: Rng>(
    duration: u64,
    window: &SamplingWindow,
    rng: &mut R,
) -> Vec<f64> {
    let duration = duration as f64;
    let increment = window.increment();

    (0..window.count)
        .map(|i| jitter(base_timestamp(duration, window, i), duration, increment, &mut *rng))
        .collect()
}

/// How a disc's samples are spread over its segments.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscPlan {
    /// Samples drawn from every segment.
    pub per_file: u32,
    /// Assumed duration of each segment.
    pub file_duration: f64,
    /// Seconds within each segment, shared by all segments.
    pub seconds: Vec<f64>,
}

/// Spread samples evenly over `segment_count` segments of equal length.
///
/// Real segments differ in length; equal slices are an approximation.
pub fn disc_plan(duration: u64, segment_count: usize, window: &SamplingWindow) -> DiscPlan {
    if segment_count == 0 {
        return DiscPlan {
            per_file: 0,
            file_duration: 0.0,
            seconds: Vec::new(),
        };
    }

    let segments = segment_count as u32;
    let per_file = window.count.div_ceil(segments);
    let file_duration = duration as f64 / segment_count as f64;
    let seconds = (0..per_file)
        .map(|i| base_timestamp(file_duration, window, i))
        .collect();

    DiscPlan {
        per_file,
        file_duration,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn window(count: u32, start: u32, end: u32) -> SamplingWindow {
        SamplingWindow { count, start, end }
    }

    #[test]
    fn test_base_timestamps_hour_long_movie() {
        let w = window(10, 5, 95);
        assert!((base_timestamp(3600.0, &w, 0) - 180.0).abs() < 1e-9);
        assert!((base_timestamp(3600.0, &w, 9) - 3096.0).abs() < 1e-9);
    }

    #[test]
    fn test_jitter_stays_within_half_step() {
        let w = window(10, 5, 95);
        let step = w.increment() * 3600.0;
        let mut rng = StdRng::seed_from_u64(7);

        let stamps = single_file_timestamps(3600, &w, &mut rng);
        assert_eq!(stamps.len(), 10);
        for (i, t) in stamps.iter().enumerate() {
            let base = base_timestamp(3600.0, &w, i as u32);
            assert!((t - base).abs() <= step / 2.0 + 1e-9);
            assert!(*t > 0.0 && *t <= 3600.0);
        }
    }

    #[test]
    fn test_timestamps_always_inside_duration() {
        let mut rng = StdRng::seed_from_u64(42);
        for duration in [1u64, 2, 7, 60, 5400] {
            for (start, end) in [(1, 99), (1, 1), (99, 99), (50, 60)] {
                for count in [1, 3, 25] {
                    let w = window(count, start, end);
                    for t in single_file_timestamps(duration, &w, &mut rng) {
                        assert!(t > 0.0, "t={} duration={}", t, duration);
                        assert!(t <= duration as f64, "t={} duration={}", t, duration);
                    }
                }
            }
        }
    }

    #[test]
    fn test_jitter_falls_back_outside_range() {
        let mut rng = StdRng::seed_from_u64(1);
        // A step larger than the whole runtime pushes most offsets out of range
        for _ in 0..100 {
            let t = jitter(1.0, 10.0, 5.0, &mut rng);
            assert!(t > 0.0 && t <= 10.0);
        }
    }

    #[test]
    fn test_disc_plan_splits_count() {
        let plan = disc_plan(3600, 2, &window(4, 5, 95));
        assert_eq!(plan.per_file, 2);
        assert!((plan.file_duration - 1800.0).abs() < 1e-9);
        assert_eq!(plan.seconds.len(), 2);
        assert!((plan.seconds[0] - 90.0).abs() < 1e-9);
        // increment = 90 / 400
        assert!((plan.seconds[1] - 1800.0 * (0.05 + 0.225)).abs() < 1e-9);
    }

    #[test]
    fn test_disc_plan_rounds_up() {
        assert_eq!(disc_plan(600, 3, &window(4, 5, 95)).per_file, 2);
        assert_eq!(disc_plan(600, 4, &window(1, 5, 95)).per_file, 1);
        assert_eq!(disc_plan(600, 0, &window(4, 5, 95)).per_file, 0);
    }

    #[test]
    fn test_disc_plan_has_no_jitter() {
        let w = window(6, 10, 90);
        assert_eq!(disc_plan(1200, 3, &w), disc_plan(1200, 3, &w));
    }
}
