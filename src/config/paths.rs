use std::path::{Path, PathBuf};

use crate::errors::{ObsidianCliError, Result};

/// Name of the directory Obsidian uses under the user config directory.
const APP_DIR_NAME: &str = "obsidian";

/// The registry document shared with Obsidian.
const CONFIG_FILE_NAME: &str = "obsidian.json";

/// Directory holding one sub-directory per vault template.
const TEMPLATES_DIR_NAME: &str = "VaultTemplates";

/// Optional preferences for this tool.
const SETTINGS_FILE_NAME: &str = "obsidian-cli.toml";

/// Locations of every file this tool reads or writes.
///
/// Resolved once per invocation and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsidianPaths {
    config_dir: PathBuf,
}

impl ObsidianPaths {
    /// Resolve the Obsidian config directory.
    ///
    /// An explicit override wins. Otherwise the platform user config
    /// directory is used (roaming AppData on Windows):
    /// - Linux: `$XDG_CONFIG_HOME/obsidian` or `~/.config/obsidian`
    /// - macOS: `~/Library/Application Support/obsidian`
    /// - Windows: `%APPDATA%\obsidian`
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::at(dir));
        }

        let base = dirs::config_dir().ok_or(ObsidianCliError::NoConfigDir)?;
        Ok(Self::at(base.join(APP_DIR_NAME)))
    }

    /// Use `config_dir` as the Obsidian config directory.
    pub fn at(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Example: `~/.config/obsidian/obsidian.json`
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Example: `~/.config/obsidian/VaultTemplates`
    pub fn templates_dir(&self) -> PathBuf {
        self.config_dir.join(TEMPLATES_DIR_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_dir_is_used_verbatim() {
        let paths = ObsidianPaths::resolve(Some(Path::new("/tmp/custom-obsidian"))).unwrap();
        assert_eq!(paths.config_dir(), Path::new("/tmp/custom-obsidian"));
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/custom-obsidian/obsidian.json")
        );
        assert_eq!(
            paths.templates_dir(),
            PathBuf::from("/tmp/custom-obsidian/VaultTemplates")
        );
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/custom-obsidian/obsidian-cli.toml")
        );
    }

    #[test]
    fn platform_dir_ends_with_obsidian() {
        // Only meaningful where the platform reports a config dir.
        if let Ok(paths) = ObsidianPaths::resolve(None) {
            assert!(paths.config_dir().ends_with("obsidian"));
        }
    }
}
