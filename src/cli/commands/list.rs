//! `obsidian-cli ls`: list registered vaults.

use crate::cli::output;
use crate::cli::{obsidian_paths, Cli};
use crate::errors::Result;
use crate::registry::VaultRegistry;

/// Execute the `ls` command.
///
/// Most recently added vaults come first. The short form prints one path
/// per line; `--long` prints a table.
pub fn execute(cli: &Cli, long: bool) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let registry = VaultRegistry::load(&paths.config_file())?;

    let mut vaults: Vec<_> = registry.vaults().collect();
    vaults.sort_by(|(_, a), (_, b)| b.date_added.cmp(&a.date_added));

    if long {
        output::info(&format!(
            "{} vault(s) registered in {}",
            vaults.len(),
            registry.path().display()
        ));
        output::print_vaults_table(&vaults);
    } else {
        for (_, entry) in &vaults {
            println!("{}", entry.path.display());
        }
    }

    Ok(())
}
