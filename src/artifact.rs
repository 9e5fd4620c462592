//! Shared artifact types.
//!
//! An [`Artifact`] is one completed generation: the original photo paired
//! with its generated plushie design, plus the metadata the dashboard shows
//! on a gallery card. Artifacts are serialized into the gallery ledger and
//! must stay wire-compatible with previously exported data, so the field
//! layout (camelCase keys, lowercase enum values, ISO-8601 timestamps) is
//! part of the contract.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual style applied by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlushStyle {
    Kawaii,
    Cartoon,
    Realistic,
    Vintage,
}

impl fmt::Display for PlushStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlushStyle::Kawaii => "kawaii",
            PlushStyle::Cartoon => "cartoon",
            PlushStyle::Realistic => "realistic",
            PlushStyle::Vintage => "vintage",
        };
        write!(f, "{name}")
    }
}

/// Physical size of the ordered plushie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlushSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for PlushSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlushSize::Small => "small",
            PlushSize::Medium => "medium",
            PlushSize::Large => "large",
        };
        write!(f, "{name}")
    }
}

/// One completed generation, as persisted in the gallery ledger.
///
/// Created only by a successful generation; mutated only through
/// favorite-toggling; removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique, generation-time-stamped identifier (`plushie_<unix-millis>`).
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Reference to the uploaded source photo.
    pub original_image: String,
    /// Reference to the generated plushie design.
    pub generated_image: String,
    pub style: PlushStyle,
    pub size: PlushSize,
    /// Creation time; serialized as an ISO-8601 string, revived on load.
    pub created_at: DateTime<Utc>,
    /// Mutable favorite flag.
    pub is_favorite: bool,
}

/// Mint an artifact id from its creation time.
///
/// `plushie_1703030400000` — the millisecond timestamp doubles as a rough
/// creation ordering when ids are compared lexically within one session.
pub fn mint_artifact_id(at: DateTime<Utc>) -> String {
    format!("plushie_{}", at.timestamp_millis())
}
