//! Upload validation and staging.
//!
//! The first step of the generate flow: a photo the user picked is checked
//! against the product's upload rules, then copied into a staging area where
//! the rest of the pipeline can display and read it. The staged copy is the
//! "local reference" the dashboard previews — transient, never part of the
//! gallery ledger, and released the moment it is superseded or cleared.
//!
//! ## Validation rules
//!
//! - Declared media type must be JPEG, PNG, or WebP. The type is declared by
//!   the file's extension; content is not sniffed, so a mislabeled file is
//!   accepted the same way the hosted dashboard accepts a mislabeled browser
//!   upload.
//! - Size must not exceed 10 MiB.
//!
//! Type is checked before size, so an oversized `.gif` reports
//! [`UploadError::InvalidType`].
//!
//! ## Reference lifecycle
//!
//! [`UploadStage`] owns at most one staged reference at a time. Whatever
//! path replaces it — a new selection, a rejected selection, [`clear`], or
//! dropping the stage — the previous staged copy is removed from disk
//! exactly once. A successful replacement stages the new copy before
//! releasing the old one, so there is never a moment where the displayed
//! reference points at a deleted file.
//!
//! ## Entry points
//!
//! Browse-to-select ([`select`]) and drag-and-drop ([`drop_files`]) funnel
//! through the same validation routine; accept/reject behavior is identical
//! regardless of how the file arrived. The stage also owns the drag-hover
//! flag the dashboard highlights its drop zone with.
//!
//! [`select`]: UploadStage::select
//! [`drop_files`]: UploadStage::drop_files
//! [`clear`]: UploadStage::clear

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Upload size ceiling: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extension → declared media type allow-list.
const ALLOWED_MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid file type. Please upload a JPG, PNG, or WebP image.")]
    InvalidType,
    #[error("File size exceeds 10MB limit. Please upload a smaller image.")]
    TooLarge,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Media type declared by a file's extension, if allowed.
pub fn declared_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    ALLOWED_MEDIA_TYPES
        .iter()
        .find(|(allowed, _)| ext.eq_ignore_ascii_case(allowed))
        .map(|(_, media_type)| *media_type)
}

/// A validated upload staged for display and generation.
///
/// Owned exclusively by the [`UploadStage`] that created it; the staged file
/// is removed when the reference is superseded, cleared, or the stage drops.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
    media_type: &'static str,
    size_bytes: u64,
}

impl StagedUpload {
    /// Path of the staged copy (inside the staging directory).
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// Owns the current staged upload, the last validation error, and the
/// drag-hover flag.
#[derive(Debug)]
pub struct UploadStage {
    staging_dir: PathBuf,
    current: Option<StagedUpload>,
    error: Option<UploadError>,
    drag_active: bool,
    /// Monotonic suffix so successive stagings never collide on disk.
    next_seq: u64,
}

impl UploadStage {
    /// Create a stage backed by the given staging directory (created if
    /// missing).
    pub fn new(staging_dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(staging_dir)?;
        Ok(Self {
            staging_dir: staging_dir.to_path_buf(),
            current: None,
            error: None,
            drag_active: false,
            next_seq: 0,
        })
    }

    /// Validate and stage a selected file, or clear the stage with `None`.
    ///
    /// Returns the resulting `(reference, error)` state pair: at most one
    /// side is `Some`. Any previously staged reference is released exactly
    /// once, whether the new selection is accepted or rejected.
    pub fn select(
        &mut self,
        source: Option<&Path>,
    ) -> (Option<&StagedUpload>, Option<&UploadError>) {
        self.error = None;

        let Some(source) = source else {
            self.release_current();
            return self.state();
        };

        match self.validate_and_stage(source) {
            Ok(staged) => {
                // Stage the replacement before releasing the old reference.
                self.release_current();
                self.current = Some(staged);
            }
            Err(err) => {
                self.release_current();
                self.error = Some(err);
            }
        }
        self.state()
    }

    /// Drop-zone entry point: stages the first dropped file through the
    /// same validation as [`select`](Self::select).
    pub fn drop_files(
        &mut self,
        files: &[PathBuf],
    ) -> (Option<&StagedUpload>, Option<&UploadError>) {
        self.drag_active = false;
        match files.first() {
            Some(first) => self.select(Some(first)),
            None => self.state(),
        }
    }

    /// A drag entered the drop zone.
    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    /// The drag left the drop zone without dropping.
    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Release the staged reference and clear any error. Idempotent.
    pub fn clear(&mut self) {
        self.release_current();
        self.error = None;
    }

    pub fn current(&self) -> Option<&StagedUpload> {
        self.current.as_ref()
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    fn state(&self) -> (Option<&StagedUpload>, Option<&UploadError>) {
        (self.current.as_ref(), self.error.as_ref())
    }

    fn validate_and_stage(&mut self, source: &Path) -> Result<StagedUpload, UploadError> {
        let media_type = declared_media_type(source).ok_or(UploadError::InvalidType)?;

        let size_bytes = fs::metadata(source)?.len();
        if size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }

        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin")
            .to_ascii_lowercase();
        let staged_path = self.staging_dir.join(format!("staged-{}.{ext}", self.next_seq));
        self.next_seq += 1;
        fs::copy(source, &staged_path)?;
        debug!(path = %staged_path.display(), size_bytes, "staged upload");

        Ok(StagedUpload {
            path: staged_path,
            media_type,
            size_bytes,
        })
    }

    /// Remove the staged copy, if any. `Option::take` makes a double
    /// release unrepresentable.
    fn release_current(&mut self) {
        if let Some(staged) = self.current.take() {
            if let Err(err) = fs::remove_file(&staged.path) {
                debug!(path = %staged.path.display(), %err, "staged file already gone");
            } else {
                debug!(path = %staged.path.display(), "released staged upload");
            }
        }
    }
}

impl Drop for UploadStage {
    fn drop(&mut self) {
        self.release_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_photo(dir: &Path, name: &str, bytes: usize) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![0xAB; bytes]).unwrap();
        path
    }

    fn stage_in(tmp: &TempDir) -> UploadStage {
        UploadStage::new(&tmp.path().join("staging")).unwrap()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn rejects_disallowed_media_type() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let gif = write_photo(tmp.path(), "pet.gif", 100);

        let (reference, error) = stage.select(Some(&gif));
        assert!(reference.is_none());
        assert!(matches!(error, Some(UploadError::InvalidType)));
    }

    #[test]
    fn rejects_file_without_extension() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let bare = write_photo(tmp.path(), "photo", 100);

        let (reference, error) = stage.select(Some(&bare));
        assert!(reference.is_none());
        assert!(matches!(error, Some(UploadError::InvalidType)));
    }

    #[test]
    fn type_checked_before_size() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let big_gif = write_photo(tmp.path(), "huge.gif", (MAX_UPLOAD_BYTES + 1) as usize);

        let (_, error) = stage.select(Some(&big_gif));
        assert!(matches!(error, Some(UploadError::InvalidType)));
    }

    #[test]
    fn rejects_file_over_ceiling() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let big = write_photo(tmp.path(), "big.jpg", (MAX_UPLOAD_BYTES + 1) as usize);

        let (reference, error) = stage.select(Some(&big));
        assert!(reference.is_none());
        assert!(matches!(error, Some(UploadError::TooLarge)));
    }

    #[test]
    fn accepts_file_at_ceiling() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let at_limit = write_photo(tmp.path(), "limit.png", MAX_UPLOAD_BYTES as usize);

        let (reference, error) = stage.select(Some(&at_limit));
        assert!(error.is_none());
        let staged = reference.unwrap();
        assert_eq!(staged.media_type(), "image/png");
        assert_eq!(staged.size_bytes(), MAX_UPLOAD_BYTES);
        assert!(staged.path().exists());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let shouty = write_photo(tmp.path(), "photo.JPG", 100);

        let (reference, error) = stage.select(Some(&shouty));
        assert!(error.is_none());
        assert_eq!(reference.unwrap().media_type(), "image/jpeg");
    }

    #[test]
    fn declared_media_type_mapping() {
        assert_eq!(
            declared_media_type(Path::new("a.jpeg")),
            Some("image/jpeg")
        );
        assert_eq!(declared_media_type(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(declared_media_type(Path::new("a.bmp")), None);
        assert_eq!(declared_media_type(Path::new("a")), None);
    }

    // =========================================================================
    // Reference lifecycle
    // =========================================================================

    #[test]
    fn successful_select_clears_prior_error() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let gif = write_photo(tmp.path(), "pet.gif", 100);
        let jpg = write_photo(tmp.path(), "pet.jpg", 100);

        stage.select(Some(&gif));
        assert!(stage.error().is_some());

        let (reference, error) = stage.select(Some(&jpg));
        assert!(reference.is_some());
        assert!(error.is_none());
    }

    #[test]
    fn replacement_releases_previous_staged_copy() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let first = write_photo(tmp.path(), "one.jpg", 100);
        let second = write_photo(tmp.path(), "two.png", 100);

        stage.select(Some(&first));
        let first_staged = stage.current().unwrap().path().to_path_buf();
        assert!(first_staged.exists());

        stage.select(Some(&second));
        assert!(!first_staged.exists(), "old staged copy must be released");
        assert!(stage.current().unwrap().path().exists());
    }

    #[test]
    fn rejected_select_releases_previous_staged_copy() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let good = write_photo(tmp.path(), "good.webp", 100);
        let bad = write_photo(tmp.path(), "bad.txt", 100);

        stage.select(Some(&good));
        let staged = stage.current().unwrap().path().to_path_buf();

        let (reference, error) = stage.select(Some(&bad));
        assert!(reference.is_none());
        assert!(error.is_some());
        assert!(!staged.exists());
    }

    #[test]
    fn select_none_releases_reference() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let photo = write_photo(tmp.path(), "pet.jpg", 100);

        stage.select(Some(&photo));
        let staged = stage.current().unwrap().path().to_path_buf();

        let (reference, error) = stage.select(None);
        assert!(reference.is_none());
        assert!(error.is_none());
        assert!(!staged.exists());
    }

    #[test]
    fn clear_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let photo = write_photo(tmp.path(), "pet.jpg", 100);

        stage.select(Some(&photo));
        stage.clear();
        stage.clear();
        assert!(stage.current().is_none());
        assert!(stage.error().is_none());
    }

    #[test]
    fn drop_releases_staged_copy() {
        let tmp = TempDir::new().unwrap();
        let photo = write_photo(tmp.path(), "pet.jpg", 100);

        let staged_path = {
            let mut stage = stage_in(&tmp);
            stage.select(Some(&photo));
            stage.current().unwrap().path().to_path_buf()
        };
        assert!(!staged_path.exists(), "drop must release the staged copy");
    }

    #[test]
    fn staging_does_not_consume_the_source_file() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let photo = write_photo(tmp.path(), "pet.jpg", 100);

        stage.select(Some(&photo));
        assert!(photo.exists());
    }

    // =========================================================================
    // Drag-and-drop entry point
    // =========================================================================

    #[test]
    fn drop_files_accepts_like_select() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let photo = write_photo(tmp.path(), "pet.webp", 100);

        stage.drag_enter();
        let (reference, error) = stage.drop_files(&[photo]);
        assert!(reference.is_some());
        assert!(error.is_none());
    }

    #[test]
    fn drop_files_rejects_like_select() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let gif = write_photo(tmp.path(), "pet.gif", 100);

        let (reference, error) = stage.drop_files(&[gif]);
        assert!(reference.is_none());
        assert!(matches!(error, Some(UploadError::InvalidType)));
    }

    #[test]
    fn drop_files_uses_first_file_only() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let first = write_photo(tmp.path(), "one.jpg", 100);
        let second = write_photo(tmp.path(), "two.gif", 100);

        let (reference, error) = stage.drop_files(&[first, second]);
        assert!(error.is_none());
        assert_eq!(reference.unwrap().media_type(), "image/jpeg");
    }

    #[test]
    fn empty_drop_leaves_state_untouched() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);
        let photo = write_photo(tmp.path(), "pet.jpg", 100);

        stage.select(Some(&photo));
        let (reference, error) = stage.drop_files(&[]);
        assert!(reference.is_some());
        assert!(error.is_none());
    }

    #[test]
    fn drag_flag_follows_enter_leave_drop() {
        let tmp = TempDir::new().unwrap();
        let mut stage = stage_in(&tmp);

        assert!(!stage.drag_active());
        stage.drag_enter();
        assert!(stage.drag_active());
        stage.drag_leave();
        assert!(!stage.drag_active());

        stage.drag_enter();
        stage.drop_files(&[]);
        assert!(!stage.drag_active());
    }
}
