//! # Plushify
//!
//! Local-first studio core for the Plushify photo-to-plushie product.
//! The hosted dashboard's stateful pieces — upload validation, the gallery
//! ledger, and the generation seam — as a UI-agnostic library, with a small
//! CLI client wired on top.
//!
//! # Architecture: The Generate Flow
//!
//! One pass through the studio looks like this:
//!
//! ```text
//! 1. Stage     photo          →  staged reference   (validate + copy)
//! 2. Generate  staged ref     →  artifact           (backend seam, stubbed)
//! 3. Keep      artifact       →  gallery ledger     (persisted JSON)
//! 4. Export    ledger         →  dist/index.html    (static gallery page)
//! ```
//!
//! The stages are deliberately independent:
//!
//! - **Swappability**: the generation backend is a one-method trait; the
//!   stub can give way to a real inference service without touching the
//!   stage or the store.
//! - **Testability**: each stage is exercisable against a temp directory,
//!   no UI framework in sight.
//! - **Crash safety**: the ledger is rewritten in full on every mutation,
//!   so a reader never observes a half-applied change.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`upload`] | Upload validation and the staged local reference lifecycle |
//! | [`generation`] | `Generator` trait seam + the simulated stub backend |
//! | [`gallery`] | Persisted gallery ledger: load/add/delete/toggle-favorite |
//! | [`artifact`] | Shared artifact record and style/size enums |
//! | [`samples`] | Stock before/after sample pool and demo identity |
//! | [`config`] | `config.toml` loading, validation, and stock config |
//! | [`export`] | Static HTML gallery page rendered with Maud |
//! | [`output`] | CLI output formatting — pure format functions |
//!
//! # Design Decisions
//!
//! ## An Explicit Store, Not Ambient State
//!
//! The gallery is a [`gallery::GalleryStore`] instance bound to one data
//! directory, created by the caller and passed where needed. Load and save
//! are explicit operations on that instance; nothing reads or writes the
//! ledger behind its back. This keeps the core testable in isolation and
//! makes ownership of the persistence medium obvious.
//!
//! ## Optimistic Persistence
//!
//! Gallery mutations always apply in memory; the ledger rewrite that
//! follows can fail without rolling them back. Callers get a
//! [`gallery::SaveStatus`] to surface as a transient warning. Losing one
//! write beats losing the user's session.
//!
//! ## Stubbed Generation Behind a Real Seam
//!
//! There is no inference here — [`generation::MockGenerator`] waits a
//! bounded random delay and picks a stock sample, exactly like the hosted
//! demo. But it sits behind [`generation::Generator`], and everything
//! downstream consumes the artifact it returns, so the day a real backend
//! exists it drops in behind the same single method.
//!
//! ## Maud Over Template Engines
//!
//! The export page is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked, type-safe, XSS-safe by default, and no template
//! directory to ship or get out of sync.

pub mod artifact;
pub mod config;
pub mod export;
pub mod gallery;
pub mod generation;
pub mod output;
pub mod samples;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_helpers;
