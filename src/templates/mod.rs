//! Vault templates: directories under `VaultTemplates` whose contents
//! seed new vaults.
//!
//! A template is nothing more than a directory; its name is the directory
//! name. The `default` template is used when none is named and is the only
//! one allowed to be missing.

pub mod copy;

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::errors::{ObsidianCliError, Result};

pub use copy::{copy_tree, CopyStats};

/// Template used when none is specified.
pub const DEFAULT_TEMPLATE: &str = "default";

/// What `TemplateManager::materialize` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    /// The template existed and was copied.
    Copied(CopyStats),
    /// The default template does not exist; nothing was copied.
    DefaultAbsent,
}

/// Lists and copies templates under a templates root.
#[derive(Debug, Clone)]
pub struct TemplateManager {
    root: PathBuf,
}

impl TemplateManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all templates, sorted.
    ///
    /// A missing templates root means there are no templates.
    pub fn list_templates(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => {
                    tracing::warn!(name = ?name, "skipping template with a non UTF-8 name");
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Directory for template `name`.
    ///
    /// `name` must be a single plain directory name; anything that could
    /// escape the templates root is rejected.
    pub fn template_dir(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(name)),
            _ => Err(ObsidianCliError::InvalidTemplateName(name.to_string())),
        }
    }

    /// Create the directory for template `name` (and the templates root).
    pub fn ensure_template_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.template_dir(name)?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Copy template `name` into `target`.
    ///
    /// A missing `default` template is a no-op; any other missing template
    /// is `TemplateNotFound` and `target` is not touched. Checking that
    /// `target` is a sensible place for a new vault is the caller's job.
    pub fn materialize(&self, target: &Path, name: &str) -> Result<Materialized> {
        let source = self.template_dir(name)?;

        if !source.is_dir() {
            if name == DEFAULT_TEMPLATE {
                tracing::debug!(root = %self.root.display(), "no default template, leaving vault empty");
                return Ok(Materialized::DefaultAbsent);
            }
            return Err(ObsidianCliError::TemplateNotFound(name.to_string()));
        }

        let stats = copy_tree(&source, target)?;
        tracing::info!(
            template = name,
            target = %target.display(),
            files = stats.files,
            dirs = stats.dirs,
            symlinks = stats.symlinks,
            "materialized template"
        );
        Ok(Materialized::Copied(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(tmp: &TempDir) -> TemplateManager {
        TemplateManager::new(tmp.path().join("VaultTemplates"))
    }

    #[test]
    fn list_is_empty_without_root() {
        let tmp = TempDir::new().unwrap();
        assert!(manager(&tmp).list_templates().unwrap().is_empty());
    }

    #[test]
    fn list_returns_sorted_directories_only() {
        let tmp = TempDir::new().unwrap();
        let templates = manager(&tmp);
        fs::create_dir_all(templates.root().join("zettel")).unwrap();
        fs::create_dir_all(templates.root().join("default")).unwrap();
        fs::write(templates.root().join("README.md"), "not a template").unwrap();

        assert_eq!(templates.list_templates().unwrap(), vec!["default", "zettel"]);
    }

    #[test]
    fn template_names_must_be_single_segments() {
        let tmp = TempDir::new().unwrap();
        let templates = manager(&tmp);
        assert!(templates.template_dir("journal").is_ok());
        for bad in ["", "..", ".", "a/b", "/etc", "../escape"] {
            assert!(
                matches!(
                    templates.template_dir(bad),
                    Err(ObsidianCliError::InvalidTemplateName(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_default_template_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("vault");
        fs::create_dir_all(&target).unwrap();

        let outcome = manager(&tmp).materialize(&target, DEFAULT_TEMPLATE).unwrap();

        assert_eq!(outcome, Materialized::DefaultAbsent);
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn missing_named_template_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("vault");

        let result = manager(&tmp).materialize(&target, "journal");

        assert!(matches!(result, Err(ObsidianCliError::TemplateNotFound(name)) if name == "journal"));
        assert!(!target.exists());
    }

    #[test]
    fn materialize_copies_template_contents() {
        let tmp = TempDir::new().unwrap();
        let templates = manager(&tmp);
        let dir = templates.ensure_template_dir("journal").unwrap();
        fs::write(dir.join("Daily.md"), "# today").unwrap();

        let target = tmp.path().join("vault");
        let outcome = templates.materialize(&target, "journal").unwrap();

        assert!(matches!(outcome, Materialized::Copied(stats) if stats.files == 1));
        assert_eq!(fs::read_to_string(target.join("Daily.md")).unwrap(), "# today");
    }
}
