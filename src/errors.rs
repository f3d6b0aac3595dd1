use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in obsidian-cli.
#[derive(Debug, Error)]
pub enum ObsidianCliError {
    // --- Config errors ---
    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Could not determine the user configuration directory; pass --config-dir")]
    NoConfigDir,

    // --- Registry errors ---
    #[error("No registered vault matches '{0}'")]
    VaultNotFound(String),

    // --- Template errors ---
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template name '{0}': must be a single directory name")]
    InvalidTemplateName(String),

    // --- New-vault preconditions ---
    #[error("Target {0} is a file, not a directory")]
    TargetIsFile(PathBuf),

    #[error("Target directory {0} is not empty (use --force to create the vault anyway)")]
    TargetNotEmpty(PathBuf),

    #[error("Parent directory of {0} does not exist")]
    ParentMissing(PathBuf),

    // --- Launcher errors ---
    #[error("Unsupported OS: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to launch Obsidian: {0}")]
    LaunchFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for obsidian-cli results.
pub type Result<T> = std::result::Result<T, ObsidianCliError>;
