//! Registry module: Obsidian's list of known vaults.
//!
//! This module provides:
//! - `VaultId` and `VaultEntry` types (`entry`)
//! - The `obsidian.json` document shape and its read/write functions (`document`)
//! - High-level `VaultRegistry` for looking up, registering and removing vaults (`store`)

pub mod document;
pub mod entry;
pub mod store;

// Re-export the most commonly used items.
pub use document::RegistryDocument;
pub use entry::{VaultEntry, VaultId};
pub use store::VaultRegistry;
