//! `obsidian-cli new`: create a vault from a template, register it, open it.

use std::fs;
use std::io;
use std::path::Path;

use crate::cli::output;
use crate::cli::{absolute_path, launcher, load_settings, obsidian_paths, Cli};
use crate::errors::{ObsidianCliError, Result};
use crate::registry::VaultRegistry;
use crate::templates::{Materialized, TemplateManager, DEFAULT_TEMPLATE};

/// State of the target directory once it has passed the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing there yet; the parent exists.
    Missing,
    /// An existing directory (empty, or non-empty with `--force`).
    Existing,
}

/// Execute the `new` command.
pub fn execute(cli: &Cli, path: &Path, template: &str, force: bool, no_open: bool) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let settings = load_settings(&paths)?;
    let target = absolute_path(path)?;
    let templates = TemplateManager::new(paths.templates_dir());

    // 1. Every check happens before anything is written.
    let template_dir = templates.template_dir(template)?;
    if template != DEFAULT_TEMPLATE && !template_dir.is_dir() {
        output::tip("Run `obsidian-cli template info` to see available templates.");
        return Err(ObsidianCliError::TemplateNotFound(template.to_string()));
    }
    let state = check_target(&target, force)?;

    // 2. Create the directory and copy the template in.
    if state == TargetState::Missing {
        fs::create_dir(&target)?;
    }
    match templates.materialize(&target, template)? {
        Materialized::Copied(stats) => output::info(&format!(
            "Copied template '{template}' ({} file(s), {} link(s))",
            stats.files, stats.symlinks
        )),
        Materialized::DefaultAbsent => {
            tracing::debug!("no default template, created an empty vault");
        }
    }

    // 3. Register it.
    let mut registry = VaultRegistry::load(&paths.config_file())?;
    let vault_id = registry.ensure_path_is_vault(&target)?;
    output::success(&format!(
        "Created vault {vault_id} at {}",
        target.display()
    ));

    // 4. Open it.
    if no_open || !settings.open_after_create {
        output::tip(&format!(
            "Run `obsidian-cli open {}` to open it in Obsidian.",
            target.display()
        ));
        return Ok(());
    }
    launcher(cli, &settings).open_vault(&vault_id, None)
}

/// Check that `target` can hold a new vault.
///
/// It must be missing with an existing parent directory, or an existing
/// empty directory. `force` also allows a non-empty directory.
pub fn check_target(target: &Path, force: bool) -> Result<TargetState> {
    match fs::metadata(target) {
        Ok(meta) if !meta.is_dir() => Err(ObsidianCliError::TargetIsFile(target.to_path_buf())),
        Ok(_) => {
            if !force && fs::read_dir(target)?.next().is_some() {
                return Err(ObsidianCliError::TargetNotEmpty(target.to_path_buf()));
            }
            Ok(TargetState::Existing)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let parent_exists = target.parent().is_some_and(Path::is_dir);
            if !parent_exists {
                return Err(ObsidianCliError::ParentMissing(target.to_path_buf()));
            }
            Ok(TargetState::Missing)
        }
        Err(e) => Err(e.into()),
    }
}
