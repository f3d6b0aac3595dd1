//! Integration tests for the vault registry and template modules.

use std::fs;
use std::path::{Path, PathBuf};

use obsidian_cli::config::ObsidianPaths;
use obsidian_cli::errors::ObsidianCliError;
use obsidian_cli::registry::{VaultId, VaultRegistry};
use obsidian_cli::templates::{Materialized, TemplateManager, DEFAULT_TEMPLATE};
use serde_json::Value;
use tempfile::TempDir;

/// Helper: an Obsidian config directory inside a fresh temp dir.
fn obsidian_dir() -> (TempDir, ObsidianPaths) {
    let dir = TempDir::new().expect("create temp dir");
    let paths = ObsidianPaths::at(dir.path().join("obsidian"));
    (dir, paths)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Register, find, remove
// ---------------------------------------------------------------------------

#[test]
fn register_find_remove_round_trip_through_disk() {
    let (_dir, paths) = obsidian_dir();

    // Empty registry -> register /tmp/v1.
    let mut registry = VaultRegistry::load(&paths.config_file()).unwrap();
    let id = registry.ensure_path_is_vault(Path::new("/tmp/v1")).unwrap();

    // A fresh load sees it.
    let reloaded = VaultRegistry::load(&paths.config_file()).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.find_by_path(Path::new("/tmp/v1")), Some(&id));

    // Remove by path, reload, empty again.
    let mut reloaded = reloaded;
    reloaded.remove("/tmp/v1").unwrap();
    assert!(VaultRegistry::load(&paths.config_file()).unwrap().is_empty());
}

#[test]
fn registering_twice_across_invocations_reuses_the_id() {
    let (_dir, paths) = obsidian_dir();

    let first = VaultRegistry::load(&paths.config_file())
        .unwrap()
        .ensure_path_is_vault(Path::new("/notes"))
        .unwrap();
    let second = VaultRegistry::load(&paths.config_file())
        .unwrap()
        .ensure_path_is_vault(Path::new("/notes"))
        .unwrap();

    assert_eq!(first, second);
    let doc = read_json(&paths.config_file());
    assert_eq!(doc["vaults"].as_object().unwrap().len(), 1);
}

#[test]
fn new_entries_are_written_with_ts_and_without_open() {
    let (_dir, paths) = obsidian_dir();
    let before = chrono::Utc::now().timestamp_millis();

    let id = VaultRegistry::load(&paths.config_file())
        .unwrap()
        .ensure_path_is_vault(Path::new("/notes"))
        .unwrap();

    let doc = read_json(&paths.config_file());
    let entry = &doc["vaults"][id.as_str()];
    assert_eq!(entry["path"], "/notes");
    assert!(entry["ts"].as_i64().unwrap() >= before);
    assert!(entry.get("open").is_none());
    assert!(VaultId::parse(id.as_str()).is_some());
}

// ---------------------------------------------------------------------------
// Documents written by Obsidian
// ---------------------------------------------------------------------------

#[test]
fn obsidian_owned_fields_survive_a_mutation() {
    let (_dir, paths) = obsidian_dir();
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(
        paths.config_file(),
        r#"{
            "vaults": {
                "0123456789abcdef": {"path": "/home/me/notes", "ts": 1690000000000, "open": true, "starred": ["a.md"]}
            },
            "frame": "hidden",
            "updateDisabled": true
        }"#,
    )
    .unwrap();

    let mut registry = VaultRegistry::load(&paths.config_file()).unwrap();
    let new_id = registry.ensure_path_is_vault(Path::new("/home/me/work")).unwrap();

    let doc = read_json(&paths.config_file());
    assert_eq!(doc["frame"], "hidden");
    assert_eq!(doc["updateDisabled"], true);
    let kept = &doc["vaults"]["0123456789abcdef"];
    assert_eq!(kept["open"], true);
    assert_eq!(kept["ts"], 1_690_000_000_000_i64);
    assert_eq!(kept["starred"][0], "a.md");
    assert_eq!(doc["vaults"][new_id.as_str()]["path"], "/home/me/work");
}

#[test]
fn malformed_document_is_a_parse_error() {
    let (_dir, paths) = obsidian_dir();
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(paths.config_file(), "{\"vaults\": {").unwrap();

    assert!(matches!(
        VaultRegistry::load(&paths.config_file()),
        Err(ObsidianCliError::ConfigParse { .. })
    ));
}

#[test]
fn remove_accepts_ids_and_reports_unknown_targets() {
    let (_dir, paths) = obsidian_dir();
    let mut registry = VaultRegistry::load(&paths.config_file()).unwrap();
    let id = registry.ensure_path_is_vault(Path::new("/a")).unwrap();
    registry.ensure_path_is_vault(Path::new("/b")).unwrap();

    let (removed, entry) = registry.remove(id.as_str()).unwrap();
    assert_eq!(removed, id);
    assert_eq!(entry.path, PathBuf::from("/a"));

    assert!(matches!(
        registry.remove(id.as_str()),
        Err(ObsidianCliError::VaultNotFound(_))
    ));
    assert_eq!(registry.len(), 1);
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[test]
fn template_materializes_into_a_new_vault() {
    let (dir, paths) = obsidian_dir();
    let templates = TemplateManager::new(paths.templates_dir());
    let source = templates.ensure_template_dir("research").unwrap();
    fs::create_dir_all(source.join(".obsidian")).unwrap();
    fs::write(source.join(".obsidian/app.json"), "{\"showLineNumber\":true}").unwrap();
    fs::write(source.join("Index.md"), "# Index").unwrap();

    let target = dir.path().join("vault");
    let outcome = templates.materialize(&target, "research").unwrap();

    assert!(matches!(outcome, Materialized::Copied(stats) if stats.files == 2));
    assert_eq!(fs::read_to_string(target.join("Index.md")).unwrap(), "# Index");
    assert!(target.join(".obsidian/app.json").is_file());
    assert_eq!(templates.list_templates().unwrap(), vec!["research"]);
}

#[test]
fn default_template_is_optional_but_others_are_not() {
    let (dir, paths) = obsidian_dir();
    let templates = TemplateManager::new(paths.templates_dir());
    let target = dir.path().join("vault");
    fs::create_dir(&target).unwrap();

    assert_eq!(
        templates.materialize(&target, DEFAULT_TEMPLATE).unwrap(),
        Materialized::DefaultAbsent
    );
    assert!(matches!(
        templates.materialize(&target, "missing"),
        Err(ObsidianCliError::TemplateNotFound(_))
    ));
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}
