//! Launcher: opens a vault in Obsidian through its URI scheme.
//!
//! See <https://help.obsidian.md/Extending+Obsidian/Obsidian+URI>.

pub mod opener;

use url::form_urlencoded;

use crate::errors::Result;
use crate::registry::VaultId;

pub use opener::{
    opener_for_os, platform_opener, MacOpen, PrintUri, Unsupported, UriOpener, WindowsStart,
    XdgOpen,
};

/// Build `<scheme>://open?vault=<id>[&file=<path>]`.
///
/// Both values are form-urlencoded, so `/` becomes `%2F` and a space `+`.
/// `file` is a path from the vault root; the `.md` extension may be omitted.
pub fn build_open_uri(scheme: &str, vault_id: &str, file: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("vault", vault_id);
    if let Some(file) = file.filter(|f| !f.is_empty()) {
        query.append_pair("file", file);
    }
    format!("{scheme}://open?{}", query.finish())
}

/// Opens vaults with a fixed scheme and opener.
pub struct Launcher {
    scheme: String,
    opener: Box<dyn UriOpener>,
}

impl Launcher {
    pub fn new(scheme: impl Into<String>, opener: Box<dyn UriOpener>) -> Self {
        Self {
            scheme: scheme.into(),
            opener,
        }
    }

    /// A launcher using the current OS's opener.
    pub fn for_platform(scheme: impl Into<String>) -> Self {
        Self::new(scheme, platform_opener())
    }

    pub fn vault_uri(&self, vault_id: &VaultId, file: Option<&str>) -> String {
        build_open_uri(&self.scheme, vault_id.as_str(), file)
    }

    /// Ask the OS to open the vault, optionally at `file`.
    ///
    /// Returns as soon as the request is handed over; there is no wait for
    /// Obsidian, no timeout and no retry.
    pub fn open_vault(&self, vault_id: &VaultId, file: Option<&str>) -> Result<()> {
        let uri = self.vault_uri(vault_id, file);
        tracing::debug!(opener = self.opener.name(), %uri, "dispatching open request");
        self.opener.open_uri(&uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording(Rc<RefCell<Vec<String>>>);

    impl UriOpener for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn open_uri(&self, uri: &str) -> Result<()> {
            self.0.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    #[test]
    fn uri_with_file_is_encoded() {
        assert_eq!(
            build_open_uri("obsidian", "abcd1234abcd1234", Some("notes/today")),
            "obsidian://open?vault=abcd1234abcd1234&file=notes%2Ftoday"
        );
    }

    #[test]
    fn uri_without_file_omits_parameter() {
        assert_eq!(
            build_open_uri("obsidian", "abcd1234abcd1234", None),
            "obsidian://open?vault=abcd1234abcd1234"
        );
        assert_eq!(
            build_open_uri("obsidian", "abcd1234abcd1234", Some("")),
            "obsidian://open?vault=abcd1234abcd1234"
        );
    }

    #[test]
    fn uri_encodes_spaces_and_reserved_characters() {
        assert_eq!(
            build_open_uri("obsidian", "abcd1234abcd1234", Some("Daily Notes/a&b=c?.md")),
            "obsidian://open?vault=abcd1234abcd1234&file=Daily+Notes%2Fa%26b%3Dc%3F.md"
        );
    }

    #[test]
    fn open_vault_hands_uri_to_opener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let launcher = Launcher::new("obsidian", Box::new(Recording(Rc::clone(&seen))));
        let id = VaultId::parse("abcd1234abcd1234").unwrap();

        launcher.open_vault(&id, Some("notes/today")).unwrap();

        assert_eq!(
            seen.borrow().as_slice(),
            ["obsidian://open?vault=abcd1234abcd1234&file=notes%2Ftoday"]
        );
    }
}
