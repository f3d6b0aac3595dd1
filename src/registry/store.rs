//! High-level registry operations used by CLI commands.
//!
//! `VaultRegistry` wraps the document layer so that commands can work
//! with simple calls like `registry.ensure_path_is_vault(&path)`.
//! Every mutation is written to disk before it returns.

use std::path::{Path, PathBuf};

use crate::errors::{ObsidianCliError, Result};

use super::document::{self, RegistryDocument};
use super::entry::{VaultEntry, VaultId};

/// The loaded vault registry. Load one per invocation with
/// `VaultRegistry::load`, then query or mutate it.
pub struct VaultRegistry {
    /// Path to `obsidian.json`.
    path: PathBuf,

    /// The parsed document, including fields this tool does not understand.
    document: RegistryDocument,
}

impl VaultRegistry {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Load the registry from `path`.
    ///
    /// A missing file is an empty registry. A malformed file is a
    /// `ConfigParse` error and is not recovered from.
    pub fn load(path: &Path) -> Result<Self> {
        let document = match document::read_document(path)? {
            Some(document) => document,
            None => {
                tracing::debug!(path = %path.display(), "no registry file, starting empty");
                RegistryDocument::default()
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Id of the vault registered at exactly `path`.
    ///
    /// Paths are compared as-is. If the document holds duplicates, the
    /// lowest id wins.
    pub fn find_by_path(&self, path: &Path) -> Option<&VaultId> {
        self.document
            .vaults
            .iter()
            .find(|(_, entry)| entry.path == path)
            .map(|(id, _)| id)
    }

    pub fn get(&self, id: &str) -> Option<&VaultEntry> {
        self.document.vaults.get(id)
    }

    /// Every registered vault, ordered by id.
    ///
    /// Display order is up to the caller.
    pub fn vaults(&self) -> impl Iterator<Item = (&VaultId, &VaultEntry)> {
        self.document.vaults.iter()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Return the id of the vault at `path`, registering it first if needed.
    ///
    /// Registering generates a new id, stamps the entry with the current
    /// local time and saves the registry. Calling this twice with the same
    /// path returns the same id and never adds a second entry.
    pub fn ensure_path_is_vault(&mut self, path: &Path) -> Result<VaultId> {
        if let Some(id) = self.find_by_path(path) {
            return Ok(id.clone());
        }

        let id = VaultId::generate();
        self.document
            .vaults
            .insert(id.clone(), VaultEntry::new(path.to_path_buf()));
        self.save()?;

        tracing::info!(vault_id = %id, path = %path.display(), "registered vault");
        Ok(id)
    }

    /// Remove a vault by id or by path, then save.
    ///
    /// A literal id match takes precedence over a path match. Returns the
    /// removed id and entry, or `VaultNotFound` if nothing matches.
    pub fn remove(&mut self, id_or_path: &str) -> Result<(VaultId, VaultEntry)> {
        let id = match self.document.vaults.get_key_value(id_or_path) {
            Some((id, _)) => id.clone(),
            None => self
                .find_by_path(Path::new(id_or_path))
                .cloned()
                .ok_or_else(|| ObsidianCliError::VaultNotFound(id_or_path.to_string()))?,
        };

        let entry = self
            .document
            .vaults
            .remove(&id)
            .ok_or_else(|| ObsidianCliError::VaultNotFound(id_or_path.to_string()))?;
        self.save()?;

        tracing::info!(vault_id = %id, path = %entry.path.display(), "removed vault");
        Ok((id, entry))
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Write the registry back to disk, unknown fields included.
    pub fn save(&self) -> Result<()> {
        document::write_document(&self.path, &self.document)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to `obsidian.json`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of registered vaults.
    pub fn len(&self) -> usize {
        self.document.vaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.vaults.is_empty()
    }

    /// Returns the underlying document.
    pub fn document(&self) -> &RegistryDocument {
        &self.document
    }
}
