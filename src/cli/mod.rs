//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod complete;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::config::{ObsidianPaths, Settings};
use crate::errors::{ObsidianCliError, Result};
use crate::launcher::{Launcher, PrintUri};
use crate::templates::DEFAULT_TEMPLATE;

/// obsidian-cli: manage Obsidian vaults and vault templates.
#[derive(Parser)]
#[command(
    name = "obsidian-cli",
    about = "Manage Obsidian vaults and vault templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Obsidian config directory (default: platform config dir + /obsidian)
    #[arg(long, env = "OBSIDIAN_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Print the obsidian:// URI instead of launching Obsidian
    #[arg(long, env = "OBSIDIAN_CLI_PRINT_URI", global = true)]
    pub print_uri: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List directories registered as Obsidian vaults
    Ls {
        /// Show a table with ids, dates and open state
        #[arg(short, long)]
        long: bool,
    },

    /// Open a directory as a vault, registering it if necessary
    Open {
        /// Vault directory
        path: PathBuf,
        /// File to open, relative to the vault root (.md may be omitted)
        #[arg(long)]
        file: Option<String>,
    },

    /// Remove a vault registration (the directory is kept)
    Rm {
        /// Vault id or path
        vault: String,
    },

    /// Create a new vault from a template
    New {
        /// Directory for the new vault (created if missing)
        path: PathBuf,
        /// Template to copy into the vault
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
        /// Allow a non-empty target directory
        #[arg(short, long)]
        force: bool,
        /// Do not open the vault after creating it
        #[arg(long)]
        no_open: bool,
    },

    /// View and edit vault templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print dynamic completion candidates (used by shell integrations)
    #[command(hide = true)]
    Complete {
        /// What to complete
        #[arg(value_enum)]
        kind: CompletionKind,
        /// The partial word typed so far
        #[arg(default_value = "", allow_hyphen_values = true)]
        partial: String,
    },
}

/// Template subcommands.
#[derive(clap::Subcommand)]
pub enum TemplateAction {
    /// List templates in the template directory
    Info,

    /// Open a template in Obsidian for editing (created if missing)
    Edit {
        /// Template name
        #[arg(default_value = DEFAULT_TEMPLATE)]
        name: String,
    },
}

/// Candidate sources for `complete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletionKind {
    /// Registered vault paths
    Vaults,
    /// Registered vault paths and sub-directories of the current directory
    VaultsAndDirs,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve Obsidian's config locations from the CLI arguments.
pub fn obsidian_paths(cli: &Cli) -> Result<ObsidianPaths> {
    ObsidianPaths::resolve(cli.config_dir.as_deref())
}

/// Load `obsidian-cli.toml`, falling back to defaults.
pub fn load_settings(paths: &ObsidianPaths) -> Result<Settings> {
    Settings::load(&paths.settings_file())
}

/// Build the launcher: the platform opener, or stdout with `--print-uri`.
pub fn launcher(cli: &Cli, settings: &Settings) -> Launcher {
    if cli.print_uri {
        Launcher::new(settings.uri_scheme.clone(), Box::new(PrintUri))
    } else {
        Launcher::for_platform(settings.uri_scheme.clone())
    }
}

/// Make `path` absolute against the current directory.
///
/// Lexical only: symlinks are not resolved and the path need not exist.
/// `.` components and trailing separators are dropped.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(absolute.components().collect())
}

/// The registry key for a path argument: vault paths are stored as strings.
pub fn path_key(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        ObsidianCliError::CommandFailed(format!("path {} is not valid UTF-8", path.display()))
    })
}
