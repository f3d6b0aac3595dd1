use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ObsidianCliError, Result};

/// Tool-level preferences, loaded from `obsidian-cli.toml` in the
/// Obsidian config directory.
///
/// Every field has a sensible default so the tool works out-of-the-box
/// without any settings file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// URI scheme registered by the host application.
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,

    /// Whether `new` opens the vault after creating it (overridden by `--no-open`).
    #[serde(default = "default_open_after_create")]
    pub open_after_create: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_uri_scheme() -> String {
    "obsidian".to_string()
}

fn default_open_after_create() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            uri_scheme: default_uri_scheme(),
            open_after_create: default_open_after_create(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        let settings: Settings =
            toml::from_str(&contents).map_err(|e| ObsidianCliError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if settings.uri_scheme.is_empty()
            || !settings
                .uri_scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(ObsidianCliError::ConfigParse {
                path: path.to_path_buf(),
                message: format!("'{}' is not a valid URI scheme", settings.uri_scheme),
            });
        }

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
