//! `obsidian-cli open`: open a directory as a vault, registering it if needed.

use std::path::Path;

use crate::cli::output;
use crate::cli::{absolute_path, launcher, load_settings, obsidian_paths, Cli};
use crate::errors::Result;
use crate::registry::VaultRegistry;

/// Execute the `open` command.
pub fn execute(cli: &Cli, path: &Path, file: Option<&str>) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let settings = load_settings(&paths)?;
    let path = absolute_path(path)?;

    if !path.is_dir() {
        output::warning(&format!("{} is not an existing directory", path.display()));
    }

    let mut registry = VaultRegistry::load(&paths.config_file())?;
    let already_registered = registry.find_by_path(&path).is_some();
    let vault_id = registry.ensure_path_is_vault(&path)?;

    if !already_registered {
        output::info(&format!(
            "Registered {} as vault {vault_id}",
            path.display()
        ));
    }

    launcher(cli, &settings).open_vault(&vault_id, file)
}
