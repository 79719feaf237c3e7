//! Still-frame sampler.
//!
//! Takes stills from a video at computed timestamps and turns every
//! extracted image into background and/or thumb artwork candidates.

use crate::core::disc::{self, SegmentEnumerator};
use crate::core::timestamps;
use crate::models::artwork::{ArtworkCandidate, ArtworkRole};
use crate::models::media::VideoSource;
use crate::models::sampling::SamplingRequest;
use crate::services::ffmpeg::FrameExtractor;
use crate::utils::fs;
use crate::{Error, Result};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Samples stills from video sources.
///
/// Holds no state between calls; every call runs its samples sequentially.
pub struct StillSampler<E, S> {
    extractor: E,
    segments: S,
    scratch_dir: PathBuf,
}

impl<E: FrameExtractor, S: SegmentEnumerator> StillSampler<E, S> {
    /// Create a sampler writing stills into `scratch_dir`.
    pub fn new(extractor: E, segments: S, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            extractor,
            segments,
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Sample `source` using the thread-local random generator for jitter.
    pub fn sample(
        &self,
        source: &VideoSource,
        request: &SamplingRequest,
    ) -> Result<Vec<ArtworkCandidate>> {
        self.sample_with_rng(source, request, &mut rand::thread_rng())
    }

    /// Sample `source`, drawing jitter from `rng`.
    ///
    /// Per-sample extraction failures are skipped, so fewer candidates than
    /// requested (or none) is a normal outcome.
    pub fn sample_with_rng<R: Rng>(
        &self,
        source: &VideoSource,
        request: &SamplingRequest,
        rng: &mut R,
    ) -> Result<Vec<ArtworkCandidate>> {
        if !self.extractor.is_available() {
            return Err(Error::CapabilityUnavailable);
        }

        if !source.path.exists() {
            return Err(Error::SourceNotFound(source.path.display().to_string()));
        }

        if source.duration == 0 || source.is_disc_image() {
            tracing::debug!(
                "Nothing to sample in {:?} ({}, {}s)",
                source.path,
                source.layout,
                source.duration
            );
            return Ok(Vec::new());
        }

        let candidates = if source.is_disc() {
            self.sample_disc(source, request)?
        } else {
            self.sample_file(source, request, rng)?
        };

        tracing::info!(
            "Produced {} artwork candidates from {:?}",
            candidates.len(),
            source.path
        );
        Ok(candidates)
    }

    fn sample_file<R: Rng>(
        &self,
        source: &VideoSource,
        request: &SamplingRequest,
        rng: &mut R,
    ) -> Result<Vec<ArtworkCandidate>> {
        let roles = request.roles();
        if roles.is_empty() {
            tracing::debug!("No artwork role requested for {}", request.artwork_type);
            return Ok(Vec::new());
        }

        let window = request.normalized();
        let seconds = timestamps::single_file_timestamps(source.duration, &window, rng);
        tracing::debug!(
            "Sampling {} stills from {:?} between {}% and {}%",
            window.count,
            source.path,
            window.start,
            window.end
        );

        fs::create_dir_all(&self.scratch_dir)?;

        let mut candidates = Vec::new();
        for second in seconds {
            self.take_still(&source.path, second, source, &roles, &mut candidates);
        }
        Ok(candidates)
    }

    fn sample_disc(
        &self,
        source: &VideoSource,
        request: &SamplingRequest,
    ) -> Result<Vec<ArtworkCandidate>> {
        let window = request.validated()?;

        let roles = request.roles();
        if roles.is_empty() {
            tracing::debug!("No artwork role requested for {}", request.artwork_type);
            return Ok(Vec::new());
        }

        let segments = disc::filter_playable(self.segments.list_segments(source)?);
        if segments.is_empty() {
            tracing::debug!("No playable disc segments in {:?}", source.path);
            return Ok(Vec::new());
        }

        let plan = timestamps::disc_plan(source.duration, segments.len(), &window);
        tracing::debug!(
            "Sampling {} stills from each of {} disc segments ({:.0}s each)",
            plan.per_file,
            segments.len(),
            plan.file_duration
        );

        fs::create_dir_all(&self.scratch_dir)?;

        let mut candidates = Vec::new();
        for segment in &segments {
            for &second in &plan.seconds {
                self.take_still(segment.path(), second, source, &roles, &mut candidates);
            }
        }
        Ok(candidates)
    }

    /// Extract one still and push a candidate per role on success.
    fn take_still(
        &self,
        file: &Path,
        second: f64,
        source: &VideoSource,
        roles: &[ArtworkRole],
        candidates: &mut Vec<ArtworkCandidate>,
    ) {
        let target = fs::unique_still_path(&self.scratch_dir);

        if let Err(e) = self.extractor.extract_still(file, &target, second) {
            tracing::debug!("Skipping still at {:.3}s of {:?}: {}", second, file, e);
            return;
        }

        for &role in roles {
            candidates.push(ArtworkCandidate::new(
                role,
                target.clone(),
                source.width,
                source.height,
                second,
            ));
        }
    }
}
