//! Shared test utilities for the plushify test suite.
//!
//! Provides artifact fixtures with stable field values so tests across
//! modules agree on what a "stock" artifact looks like.

use chrono::{TimeZone, Utc};

use crate::artifact::{Artifact, PlushSize, PlushStyle};

/// A kawaii/medium artifact with deterministic fields derived from `id`.
///
/// Created unflagged at a fixed timestamp (2023-12-20) so listings and
/// serialized output are stable across runs.
pub fn artifact_fixture(id: &str) -> Artifact {
    Artifact {
        id: id.to_string(),
        user_id: "user_1".to_string(),
        original_image: format!("before-{id}.jpg"),
        generated_image: format!("after-{id}.jpg"),
        style: PlushStyle::Kawaii,
        size: PlushSize::Medium,
        created_at: Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
        is_favorite: false,
    }
}
