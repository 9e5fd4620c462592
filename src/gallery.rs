//! The gallery ledger: persisted collection of generated artifacts.
//!
//! The dashboard's gallery is a newest-first list of [`Artifact`] records
//! that must survive across sessions. This module owns both the in-memory
//! collection and its on-disk form, and keeps the two converged: every
//! mutation applies in memory and then rewrites the full ledger before
//! returning, so readers only ever observe the pre- or post-mutation
//! collection, never a partial write.
//!
//! ## Storage
//!
//! One JSON file, `plushify-gallery.json`, inside the studio data directory:
//! a serialized array of artifacts in display order, camelCase fields,
//! ISO-8601 timestamps. The file is owned exclusively by [`GalleryStore`];
//! nothing else writes it.
//!
//! ## Failure policy
//!
//! - **Load**: a missing or unparseable ledger yields an empty store. The
//!   problem is logged, never raised — a corrupt ledger must not take the
//!   dashboard down.
//! - **Save**: mutations are optimistic. If the rewrite fails (disk full,
//!   permissions), the in-memory change stands and the caller gets a
//!   [`SaveStatus::MemoryOnly`] signal to surface as a transient warning.
//!   Nothing is rolled back.

use crate::artifact::Artifact;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the gallery ledger file within the data directory.
pub const LEDGER_FILENAME: &str = "plushify-gallery.json";

/// Outcome of a mutating store operation.
///
/// The mutation itself always succeeds; this reports whether it also
/// reached disk.
#[derive(Debug)]
#[must_use = "MemoryOnly means the ledger write failed and the user should be told"]
pub enum SaveStatus {
    /// In-memory collection and ledger are converged.
    Persisted,
    /// The in-memory mutation stands but the ledger rewrite failed.
    MemoryOnly(io::Error),
}

impl SaveStatus {
    pub fn is_persisted(&self) -> bool {
        matches!(self, SaveStatus::Persisted)
    }
}

/// Explicitly owned gallery collection bound to one data directory.
#[derive(Debug)]
pub struct GalleryStore {
    dir: PathBuf,
    entries: Vec<Artifact>,
}

impl GalleryStore {
    /// Load the ledger from a data directory.
    ///
    /// A missing ledger (first run) or one that fails to parse yields an
    /// empty store; timestamps in a parseable ledger are revived to
    /// structured dates by deserialization.
    pub fn load(dir: &Path) -> Self {
        let path = ledger_path(dir);
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Artifact>>(&content) {
                Ok(entries) => {
                    debug!(count = entries.len(), "loaded gallery ledger");
                    entries
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "gallery ledger unreadable, starting empty");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "gallery ledger unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            dir: dir.to_path_buf(),
            entries,
        }
    }

    /// Rewrite the full ledger from the in-memory collection.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(ledger_path(&self.dir), json)
    }

    /// Prepend an artifact (newest first) and rewrite the ledger.
    ///
    /// An existing entry with the same id is removed first, keeping the
    /// collection unique by identifier.
    pub fn add(&mut self, artifact: Artifact) -> SaveStatus {
        self.entries.retain(|entry| entry.id != artifact.id);
        self.entries.insert(0, artifact);
        self.persist()
    }

    /// Remove the artifact with the given id, then rewrite the ledger.
    /// No-op on the collection when the id is absent.
    pub fn delete(&mut self, id: &str) -> SaveStatus {
        self.entries.retain(|entry| entry.id != id);
        self.persist()
    }

    /// Flip the favorite flag on the matching artifact, then rewrite the
    /// ledger. No-op on the collection when the id is absent.
    pub fn toggle_favorite(&mut self, id: &str) -> SaveStatus {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.is_favorite = !entry.is_favorite;
        }
        self.persist()
    }

    /// All artifacts, newest first.
    pub fn entries(&self) -> &[Artifact] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Artifacts flagged as favorites, newest first.
    pub fn favorites(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.iter().filter(|entry| entry.is_favorite)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> SaveStatus {
        match self.save() {
            Ok(()) => SaveStatus::Persisted,
            Err(err) => {
                warn!(%err, "gallery ledger write failed, keeping in-memory state");
                SaveStatus::MemoryOnly(err)
            }
        }
    }
}

/// Resolve the ledger path for a data directory.
pub fn ledger_path(dir: &Path) -> PathBuf {
    dir.join(LEDGER_FILENAME)
}
