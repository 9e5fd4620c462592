//! Static gallery export.
//!
//! Renders the gallery as a standalone `index.html`: a grid of before/after
//! cards with style, size, creation date, and a favorite marker, plus an
//! empty state when nothing has been generated yet. The page is the
//! shareable counterpart of the dashboard's gallery view — plain HTML and
//! CSS, droppable on any file server.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! checked, type-safe, auto-escaped. The stylesheet is embedded at compile
//! time; color custom properties come from `config.toml` so an exported
//! page matches the owner's theme.

use crate::artifact::Artifact;
use crate::config::{self, StudioConfig};
use crate::gallery::GalleryStore;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Write the gallery page into `output_dir` and return the page path.
pub fn export(
    store: &GalleryStore,
    config: &StudioConfig,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let color_css = config::generate_color_css(&config.export.colors);
    let css = format!("{color_css}\n\n{CSS_STATIC}");

    fs::create_dir_all(output_dir)?;
    let page = render_gallery_page(store.entries(), config, &css);
    let path = output_dir.join("index.html");
    fs::write(&path, page.into_string())?;
    Ok(path)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the page header with title, owner, and plushie count.
fn page_header(config: &StudioConfig, count: usize) -> Markup {
    let count_label = match count {
        1 => "1 plushie".to_string(),
        n => format!("{n} plushies"),
    };
    html! {
        header.gallery-header {
            h1 { (config.export.site_title) }
            p.gallery-meta {
                (config.user.name) " · " (count_label)
            }
        }
    }
}

/// Renders one before/after gallery card.
fn render_card(artifact: &Artifact) -> Markup {
    html! {
        article.card id=(artifact.id) {
            div.card-images {
                figure {
                    img src=(artifact.original_image) alt="Original photo" loading="lazy";
                    figcaption { "Before" }
                }
                figure {
                    img src=(artifact.generated_image) alt="Plushie design" loading="lazy";
                    figcaption { "After" }
                }
            }
            div.card-meta {
                span.card-style { (artifact.style) }
                span.card-size { (artifact.size) }
                @if artifact.is_favorite {
                    span.card-favorite { "♥" }
                }
            }
            p.card-date { (artifact.created_at.format("%b %-d, %Y")) }
        }
    }
}

/// Renders the empty state shown before the first generation.
fn render_empty_state() -> Markup {
    html! {
        div.empty-state {
            p.empty-title { "No plushies yet" }
            p.empty-hint { "Generate your first plushie to see it here." }
        }
    }
}

/// Renders the full gallery page.
fn render_gallery_page(entries: &[Artifact], config: &StudioConfig, css: &str) -> Markup {
    let content = html! {
        (page_header(config, entries.len()))
        main {
            @if entries.is_empty() {
                (render_empty_state())
            } @else {
                div.gallery-grid {
                    @for artifact in entries {
                        (render_card(artifact))
                    }
                }
            }
        }
    };
    base_document(&config.export.site_title, css, content)
}
