//! `obsidian-cli rm`: remove a vault registration.

use std::path::Path;

use crate::cli::output;
use crate::cli::{absolute_path, obsidian_paths, path_key, Cli};
use crate::errors::{ObsidianCliError, Result};
use crate::registry::VaultRegistry;

/// Execute the `rm` command.
///
/// `vault` is tried as a literal id or stored path first, then as a path
/// made absolute against the current directory. Only the registration is
/// removed; the directory stays on disk.
pub fn execute(cli: &Cli, vault: &str) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let mut registry = VaultRegistry::load(&paths.config_file())?;

    let (vault_id, entry) = match registry.remove(vault) {
        Err(ObsidianCliError::VaultNotFound(_)) => {
            let path = absolute_path(Path::new(vault))?;
            registry.remove(path_key(&path)?)?
        }
        removed => removed?,
    };

    output::success(&format!(
        "Removed vault {vault_id} ({})",
        entry.path.display()
    ));
    output::tip("The vault directory itself was not deleted.");

    Ok(())
}
