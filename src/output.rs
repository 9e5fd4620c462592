//! CLI output formatting.
//!
//! Output is information-centric: the primary display for an artifact is
//! its positional index plus the facts a gallery card shows (style, size,
//! date, favorite), with references shown as secondary context via indented
//! lines. Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Gallery (2 plushies)
//! 001 kawaii medium  Dec 20, 2023  ♥
//!     Id: plushie_1703030400000
//!     Original: originals/plushie_1703030400000.jpg
//!     Generated: /plushies/samples/after-1.jpg
//! 002 cartoon large  Dec 18, 2023
//!     ...
//! ```

use crate::artifact::Artifact;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for one artifact: index, style, size, date, favorite marker.
fn artifact_header(index: usize, artifact: &Artifact) -> String {
    let mut line = format!(
        "{} {} {}  {}",
        format_index(index),
        artifact.style,
        artifact.size,
        artifact.created_at.format("%b %-d, %Y")
    );
    if artifact.is_favorite {
        line.push_str("  ♥");
    }
    line
}

/// Indented context lines for one artifact.
fn artifact_context(artifact: &Artifact) -> Vec<String> {
    vec![
        format!("    Id: {}", artifact.id),
        format!("    Original: {}", artifact.original_image),
        format!("    Generated: {}", artifact.generated_image),
    ]
}

/// Format a gallery listing.
pub fn format_gallery(entries: &[&Artifact], heading: &str) -> Vec<String> {
    if entries.is_empty() {
        return vec![format!("{heading} is empty. Generate your first plushie!")];
    }

    let count_label = match entries.len() {
        1 => "1 plushie".to_string(),
        n => format!("{n} plushies"),
    };

    let mut lines = vec![format!("{heading} ({count_label})")];
    for (pos, artifact) in entries.iter().enumerate() {
        lines.push(artifact_header(pos + 1, artifact));
        lines.extend(artifact_context(artifact));
    }
    lines
}

/// Format the summary printed after a successful generation.
pub fn format_generated(artifact: &Artifact) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} {} plushie",
        artifact.style, artifact.size
    )];
    lines.extend(artifact_context(artifact));
    lines
}

pub fn print_gallery(entries: &[&Artifact], heading: &str) {
    for line in format_gallery(entries, heading) {
        println!("{line}");
    }
}

pub fn print_generated(artifact: &Artifact) {
    for line in format_generated(artifact) {
        println!("{line}");
    }
}
