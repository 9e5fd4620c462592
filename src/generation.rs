//! Generation backend seam.
//!
//! The [`Generator`] trait is the single swap point between the studio core
//! and whatever actually produces plushie designs. It has one operation —
//! request in, artifact out — so a real inference backend can replace the
//! stub without touching the upload stage or the gallery store.
//!
//! `generate` takes `&mut self`: a session holds one generator, and the
//! exclusive borrow makes a second request while one is outstanding
//! unrepresentable.
//!
//! The shipped implementation, [`MockGenerator`], simulates the product's
//! hosted pipeline: it waits a uniformly random 3–5 seconds, then returns a
//! randomly chosen design from the stock sample pool, stamped with the
//! requested style and size. The artifact it returns is exactly what a real
//! backend would produce, so everything downstream is already
//! backend-agnostic.

use crate::artifact::{Artifact, PlushSize, PlushStyle, mint_artifact_id};
use crate::samples::{GALLERY_SAMPLES, GallerySample};
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::Range;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No gallery samples available")]
    NoSamples,
}

/// A backend that turns an uploaded photo into a plushie design.
pub trait Generator {
    /// Produce an artifact for the given source image, style, and size.
    ///
    /// Blocks for the backend's generation time. One request at a time per
    /// generator; the exclusive borrow enforces it.
    fn generate(
        &mut self,
        original_image: &str,
        style: PlushStyle,
        size: PlushSize,
    ) -> Result<Artifact, GenerationError>;
}

/// Simulated delay bounds for the stub, in milliseconds.
const STUB_DELAY_MS: Range<u64> = 3000..5000;

/// Stub backend: bounded random delay, random stock sample.
pub struct MockGenerator {
    user_id: String,
    delay_ms: Range<u64>,
    samples: Vec<GallerySample>,
}

impl MockGenerator {
    /// Stub with production-like behavior: 3–5 s delay, built-in samples.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            delay_ms: STUB_DELAY_MS,
            samples: GALLERY_SAMPLES.to_vec(),
        }
    }

    /// Stub that resolves immediately. For tests and scripted runs.
    pub fn instant(user_id: impl Into<String>) -> Self {
        Self::new(user_id).with_delay_ms(0..0)
    }

    /// Override the simulated delay bounds. An empty range means no delay.
    pub fn with_delay_ms(mut self, delay_ms: Range<u64>) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Override the sample pool the stub draws results from.
    pub fn with_samples(mut self, samples: Vec<GallerySample>) -> Self {
        self.samples = samples;
        self
    }
}

impl Generator for MockGenerator {
    fn generate(
        &mut self,
        original_image: &str,
        style: PlushStyle,
        size: PlushSize,
    ) -> Result<Artifact, GenerationError> {
        let mut rng = rand::thread_rng();

        if !self.delay_ms.is_empty() {
            let delay = rng.gen_range(self.delay_ms.clone());
            debug!(delay_ms = delay, "simulating generation");
            std::thread::sleep(Duration::from_millis(delay));
        }

        let sample = self
            .samples
            .choose(&mut rng)
            .ok_or(GenerationError::NoSamples)?;

        let now = Utc::now();
        Ok(Artifact {
            id: mint_artifact_id(now),
            user_id: self.user_id.clone(),
            original_image: original_image.to_string(),
            generated_image: sample.generated_image.to_string(),
            style,
            size,
            created_at: now,
            is_favorite: false,
        })
    }
}
