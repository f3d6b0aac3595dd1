//! Config module: where Obsidian keeps its files, and this tool's settings.
//!
//! - `ObsidianPaths` resolves the Obsidian config directory and the files in it (`paths`)
//! - `Settings` holds the optional `obsidian-cli.toml` preferences (`settings`)

pub mod paths;
pub mod settings;

pub use paths::ObsidianPaths;
pub use settings::Settings;
