//! Dynamic completion candidates for vault paths and local directories.
//!
//! Candidates are filtered by a case-insensitive prefix match against the
//! partial word (raw or quoted), then shell-escaped before they are printed.

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::registry::VaultRegistry;

/// One completion candidate with an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub help: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: help.into(),
        }
    }
}

/// Quote `s` for a POSIX shell, leaving it bare when that is safe.
///
/// Only ASCII letters, digits and `_@%+=:,./-` count as safe.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }

    let safe = s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || "@%+=:,./-".contains(c));
    if safe {
        return s.to_string();
    }

    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Keep the candidates matching `incomplete`, shell-escaping each survivor.
///
/// A candidate matches when either its raw or its quoted text starts with
/// `incomplete`, ignoring case. Order is preserved.
pub fn quote_and_filter(incomplete: &str, candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    let incomplete = incomplete.to_lowercase();

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let quoted = shell_quote(&candidate.value);
            let matches = candidate.value.to_lowercase().starts_with(&incomplete)
                || quoted.to_lowercase().starts_with(&incomplete);
            matches.then(|| Suggestion::new(quoted, candidate.help))
        })
        .collect()
}

/// Registered vault paths, described by their ids.
pub fn vault_suggestions(registry: &VaultRegistry) -> Vec<Suggestion> {
    registry
        .vaults()
        .map(|(id, entry)| Suggestion::new(entry.path.display().to_string(), id.to_string()))
        .collect()
}

/// Sub-directories of `dir`. Dot-directories only when `incomplete` starts with `.`.
pub fn local_dir_suggestions(dir: &Path, incomplete: &str) -> Result<Vec<Suggestion>> {
    let allow_dotfiles = incomplete.starts_with('.');
    let mut suggestions = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if allow_dotfiles || !name.starts_with('.') {
            suggestions.push(Suggestion::new(name, ""));
        }
    }

    suggestions.sort_by(|a, b| a.value.cmp(&b.value));
    Ok(suggestions)
}
