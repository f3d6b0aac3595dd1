//! `obsidian-cli complete`: print completion candidates, one per line.
//!
//! Each line is `<escaped value>` or `<escaped value>\t<description>`.

use crate::cli::complete::{local_dir_suggestions, quote_and_filter, vault_suggestions};
use crate::cli::{obsidian_paths, Cli, CompletionKind};
use crate::errors::Result;
use crate::registry::VaultRegistry;

/// Execute the `complete` command.
pub fn execute(cli: &Cli, kind: CompletionKind, partial: &str) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let registry = VaultRegistry::load(&paths.config_file())?;

    let mut candidates = vault_suggestions(&registry);
    if kind == CompletionKind::VaultsAndDirs {
        let cwd = std::env::current_dir()?;
        candidates.extend(local_dir_suggestions(&cwd, partial)?);
    }

    for suggestion in quote_and_filter(partial, candidates) {
        if suggestion.help.is_empty() {
            println!("{}", suggestion.value);
        } else {
            println!("{}\t{}", suggestion.value, suggestion.help);
        }
    }

    Ok(())
}
