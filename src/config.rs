//! Studio configuration.
//!
//! Handles loading and validating `config.toml` from the data directory.
//! All options are optional — user config files are sparse overrides on top
//! of stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [user]
//! id = "user_1"             # Owner id stamped on generated artifacts
//! name = "Sarah Johnson"    # Display name on the exported gallery page
//!
//! [generation]
//! default_style = "kawaii"  # kawaii | cartoon | realistic | vintage
//! default_size = "medium"   # small | medium | large
//! min_delay_ms = 3000       # Simulated generation delay lower bound
//! max_delay_ms = 5000       # Simulated generation delay upper bound
//!
//! [export]
//! site_title = "Plushify"   # Heading of the exported gallery page
//!
//! [export.colors.light]
//! background = "#fff7f9"
//! text = "#2b2129"
//! text_muted = "#8a7b84"
//! border = "#f2dde4"
//! accent = "#e75480"
//!
//! [export.colors.dark]
//! background = "#1b1418"
//! text = "#f4e9ee"
//! text_muted = "#9d8d96"
//! border = "#3a2c34"
//! accent = "#ff8fb1"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::artifact::{PlushSize, PlushStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file within the data directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Studio configuration loaded from `config.toml`.
///
/// All fields have sensible defaults; user config files need only specify
/// the values they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub user: UserConfig,
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

impl StudioConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.max_delay_ms < self.generation.min_delay_ms {
            return Err(ConfigError::Validation(
                "generation.max_delay_ms must be >= generation.min_delay_ms".into(),
            ));
        }
        if self.user.id.trim().is_empty() {
            return Err(ConfigError::Validation("user.id must not be empty".into()));
        }
        Ok(())
    }
}

/// Owner identity stamped on generated artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub id: String,
    pub name: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            id: crate::samples::DEMO_USER_ID.to_string(),
            name: crate::samples::DEMO_USER_NAME.to_string(),
        }
    }
}

/// Defaults and simulated-delay bounds for the generate flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub default_style: PlushStyle,
    pub default_size: PlushSize,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_style: PlushStyle::Kawaii,
            default_size: PlushSize::Medium,
            min_delay_ms: 3000,
            max_delay_ms: 5000,
        }
    }
}

/// Settings for the exported gallery page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub site_title: String,
    pub colors: ColorConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            site_title: "Plushify".to_string(),
            colors: ColorConfig::default(),
        }
    }
}

/// Color schemes for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorSet,
    pub dark: ColorSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSet {
    pub background: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
}

impl Default for ColorSet {
    fn default() -> Self {
        // Light scheme; `ColorConfig::default` swaps in the dark values.
        Self {
            background: "#fff7f9".into(),
            text: "#2b2129".into(),
            text_muted: "#8a7b84".into(),
            border: "#f2dde4".into(),
            accent: "#e75480".into(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorSet::default(),
            dark: ColorSet {
                background: "#1b1418".into(),
                text: "#f4e9ee".into(),
                text_muted: "#9d8d96".into(),
                border: "#3a2c34".into(),
                accent: "#ff8fb1".into(),
            },
        }
    }
}

/// Load `config.toml` from the data directory. Missing file means stock
/// defaults; a present file is parsed strictly and validated.
pub fn load_config(dir: &Path) -> Result<StudioConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        StudioConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// CSS custom properties for the configured color schemes.
///
/// Dark mode follows the visitor's `prefers-color-scheme`, as on the
/// hosted dashboard.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme(set: &ColorSet) -> String {
        format!(
            "  --background: {};\n  --text: {};\n  --text-muted: {};\n  --border: {};\n  --accent: {};",
            set.background, set.text, set.text_muted, set.border, set.accent
        )
    }
    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n  :root {{\n{}\n  }}\n}}",
        scheme(&colors.light),
        scheme(&colors.dark)
    )
}

/// A documented stock `config.toml`, printed by `plushify gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = StudioConfig::default();
    format!(
        "\
# Plushify studio configuration.
# All options are optional - the values below are the stock defaults.

[user]
id = \"{user_id}\"
name = \"{user_name}\"

[generation]
default_style = \"{style}\"   # kawaii | cartoon | realistic | vintage
default_size = \"{size}\"     # small | medium | large
min_delay_ms = {min_delay}
max_delay_ms = {max_delay}

[export]
site_title = \"{title}\"

[export.colors.light]
background = \"{lbg}\"
text = \"{ltext}\"
text_muted = \"{lmuted}\"
border = \"{lborder}\"
accent = \"{laccent}\"

[export.colors.dark]
background = \"{dbg}\"
text = \"{dtext}\"
text_muted = \"{dmuted}\"
border = \"{dborder}\"
accent = \"{daccent}\"
",
        user_id = defaults.user.id,
        user_name = defaults.user.name,
        style = defaults.generation.default_style,
        size = defaults.generation.default_size,
        min_delay = defaults.generation.min_delay_ms,
        max_delay = defaults.generation.max_delay_ms,
        title = defaults.export.site_title,
        lbg = defaults.export.colors.light.background,
        ltext = defaults.export.colors.light.text,
        lmuted = defaults.export.colors.light.text_muted,
        lborder = defaults.export.colors.light.border,
        laccent = defaults.export.colors.light.accent,
        dbg = defaults.export.colors.dark.background,
        dtext = defaults.export.colors.dark.text,
        dmuted = defaults.export.colors.dark.text_muted,
        dborder = defaults.export.colors.dark.border,
        daccent = defaults.export.colors.dark.accent,
    )
}
