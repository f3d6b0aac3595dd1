//! `VaultId` and `VaultEntry`: one registered vault in `obsidian.json`.
//!
//! Entries carry a `#[serde(flatten)]` bag of fields this tool does not
//! understand, so whatever Obsidian stores next to `path`/`ts`/`open`
//! survives a load→save cycle.

use std::borrow::Borrow;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key of a vault in the registry: 16 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultId(String);

impl VaultId {
    /// Length of a generated id in characters.
    pub const LEN: usize = 16;

    /// Generate a fresh id from 8 random bytes.
    ///
    /// Collisions are not checked; 64 bits of entropy make them negligible.
    pub fn generate() -> Self {
        let bytes: [u8; Self::LEN / 2] = rand::random();
        Self(hex::encode(bytes))
    }

    /// Accept `s` only if it has the shape of a generated id.
    pub fn parse(s: &str) -> Option<Self> {
        let well_formed = s.len() == Self::LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VaultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VaultId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single registered vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Absolute path of the vault root.
    pub path: PathBuf,

    /// When the vault was registered. Stored as epoch milliseconds under `ts`.
    #[serde(
        rename = "ts",
        serialize_with = "ts_millis_encode",
        deserialize_with = "ts_millis_decode"
    )]
    pub date_added: DateTime<Local>,

    /// Whether Obsidian last had this vault open. Informational only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub open: bool,

    /// Fields owned by Obsidian that this tool passes through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VaultEntry {
    /// A new entry for `path`, stamped with the current local time.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            date_added: Local::now(),
            open: false,
            extra: Map::new(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ── Serde helpers for the `ts` field ─────────────────────────────────

pub(crate) fn ts_millis_encode<S>(
    ts: &DateTime<Local>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(ts.timestamp_millis())
}

pub(crate) fn ts_millis_decode<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = i64::deserialize(deserializer)?;
    DateTime::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp {millis} is out of range")))
}
