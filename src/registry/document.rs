//! On-disk shape of `obsidian.json` and the functions that read/write it.
//!
//! ```text
//! {
//!   "vaults": { "<16-hex-id>": { "path": "...", "ts": 1690000000000, "open": true } },
//!   "...anything else Obsidian keeps here": ...
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ObsidianCliError, Result};

use super::entry::{VaultEntry, VaultId};

/// The whole registry document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryDocument {
    /// Vault id -> vault.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vaults: BTreeMap<VaultId, VaultEntry>,

    /// Top-level fields owned by Obsidian, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Read and parse the document at `path`.
///
/// Returns `Ok(None)` if the file does not exist. A file that exists but
/// is not a valid registry document is a `ConfigParse` error.
pub fn read_document(path: &Path) -> Result<Option<RegistryDocument>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let document =
        serde_json::from_str(&contents).map_err(|e| ObsidianCliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Some(document))
}

/// Serialize `document` and write it to `path`.
///
/// Missing parent directories are created. The bytes go to a temp file in
/// the same directory which is then renamed over `path`, so readers never
/// see a half-written file. If `path` is a symlink, the file it points to
/// is replaced and the link is kept. There is no locking: the last writer
/// wins.
pub fn write_document(path: &Path, document: &RegistryDocument) -> Result<()> {
    let json = serde_json::to_vec(document)
        .map_err(|e| ObsidianCliError::Serialization(e.to_string()))?;

    let resolved = resolve_destination(path)?;
    let path = resolved.as_path();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let file_name = path
        .file_name()
        .map_or_else(|| "obsidian.json".into(), |n| n.to_string_lossy());
    let tmp_path = parent.join(format!(".{file_name}.{}.tmp", std::process::id()));

    fs::write(&tmp_path, &json)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote registry document");
    Ok(())
}

/// The file a write to `path` should replace: `path` itself, or the target
/// of the symlink at `path` (which may not exist yet).
fn resolve_destination(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let target = fs::read_link(path)?;
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                Ok(base.join(target))
            }
            Err(e) => Err(e.into()),
        },
        _ => Ok(path.to_path_buf()),
    }
}
