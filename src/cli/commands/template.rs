//! `obsidian-cli template`: list and edit vault templates.

use crate::cli::output;
use crate::cli::{absolute_path, launcher, load_settings, obsidian_paths, Cli};
use crate::errors::Result;
use crate::registry::VaultRegistry;
use crate::templates::TemplateManager;

/// Execute `obsidian-cli template info`.
pub fn execute_info(cli: &Cli) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let templates = TemplateManager::new(paths.templates_dir());
    let names = templates.list_templates()?;

    output::info(&format!(
        "Found {} template(s) at {}",
        names.len(),
        templates.root().display()
    ));
    for name in &names {
        println!("{name}");
    }

    if names.is_empty() {
        output::tip("Run `obsidian-cli template edit` to create the default template.");
    }

    Ok(())
}

/// Execute `obsidian-cli template edit`.
///
/// The template directory is created if needed, registered as a vault of
/// its own and opened, so it can be edited in Obsidian like any vault.
pub fn execute_edit(cli: &Cli, name: &str) -> Result<()> {
    let paths = obsidian_paths(cli)?;
    let settings = load_settings(&paths)?;
    let templates = TemplateManager::new(paths.templates_dir());

    let template_dir = absolute_path(&templates.ensure_template_dir(name)?)?;
    let mut registry = VaultRegistry::load(&paths.config_file())?;
    let vault_id = registry.ensure_path_is_vault(&template_dir)?;

    output::info(&format!(
        "Editing template '{name}' ({}) as vault {vault_id}",
        template_dir.display()
    ));

    launcher(cli, &settings).open_vault(&vault_id, None)
}
