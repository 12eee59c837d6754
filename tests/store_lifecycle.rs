//! Store edits flowing through to the rebuilt tree
//!
//! - Create/update/delete are reflected on the next rebuild
//! - Untouched nodes keep their ids and positions
//! - Bulk JSON edits replace the collection atomically

use std::io::Write;

use settings_explorer::{
    find_node, render_text, EffectiveConfig, NodeKind, RenderOptions, Setting, SettingsStore,
    StoreError,
};
use tempfile::NamedTempFile;

const QA1: &str = "test#us-west-2#qa1";

#[test]
fn test_update_changes_only_the_leaf() {
    let mut store = SettingsStore::sample().unwrap();
    let before = store.forest().unwrap();

    store.upsert(QA1, "ServerConfig.CommandTimeout", "300").unwrap();
    let after = store.forest().unwrap();

    let id = "test#us-west-2#qa1#ServerConfig#CommandTimeout";
    assert_eq!(find_node(&before, id).unwrap().value(), Some("120"));
    assert_eq!(find_node(&after, id).unwrap().value(), Some("300"));

    // Everything else is structurally identical
    let ids_before: Vec<&str> = before.iter().flat_map(|n| n.walk()).map(|n| n.id.as_str()).collect();
    let ids_after: Vec<&str> = after.iter().flat_map(|n| n.walk()).map(|n| n.id.as_str()).collect();
    assert_eq!(ids_before, ids_after);
}

#[test]
fn test_create_adds_group_and_leaf() {
    let mut store = SettingsStore::sample().unwrap();
    store
        .create(Setting::new(QA1, "FeatureFlags:Search:Enabled", "true").unwrap())
        .unwrap();

    let forest = store.forest().unwrap();
    let flags = find_node(&forest, "test#us-west-2#qa1#FeatureFlags").unwrap();
    assert_eq!(flags.kind, NodeKind::Group);
    let search = find_node(&forest, "test#us-west-2#qa1#FeatureFlags#Search").unwrap();
    assert_eq!(search.kind, NodeKind::Group);
    let enabled = find_node(&forest, "test#us-west-2#qa1#FeatureFlags#Search#Enabled").unwrap();
    assert_eq!(enabled.value(), Some("true"));
}

#[test]
fn test_create_new_environment() {
    let mut store = SettingsStore::sample().unwrap();
    store.upsert("prod#eu-west-1#web", "ServerConfig.ShowSql", "false").unwrap();

    let forest = store.forest().unwrap();
    let names: Vec<&str> = forest.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["prod", "test"]);
}

#[test]
fn test_delete_removes_leaf() {
    let mut store = SettingsStore::sample().unwrap();
    let ack = store.delete("test#us-west-2#branch-master", "Update");
    assert!(ack.removed);

    let forest = store.forest().unwrap();
    assert!(find_node(&forest, "test#us-west-2#branch-master#Update").is_none());
    assert!(find_node(&forest, "test#us-west-2#branch-master#ServerConfig").is_some());
}

#[test]
fn test_invalid_path_never_enters_store() {
    let mut store = SettingsStore::sample().unwrap();
    let len = store.len();

    let err = store.upsert("onlyonesegment", "k", "v").unwrap_err();
    assert!(matches!(err, StoreError::Tree(_)));
    assert_eq!(store.len(), len);
}

#[test]
fn test_bulk_edit_round_trip() {
    let mut store = SettingsStore::sample().unwrap();
    let raw = store.to_json().unwrap();

    let edited = raw.replace("\"ElastiCache\"", "\"Memcached\"");
    let count = store.replace_from_json(&edited).unwrap();
    assert_eq!(count, 299);

    let forest = store.forest().unwrap();
    let node = find_node(
        &forest,
        "test#us-west-2#qa1#MemcachedClientConfigSettings#Strategy",
    )
    .unwrap();
    assert_eq!(node.value(), Some("Memcached"));
}

#[test]
fn test_load_file_and_render() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"path": "dev#local", "key": "Db.Password", "value": "hunter2"}},
            {{"path": "dev#local", "key": "Db.Port", "value": "5432"}},
            {{"id": "custom-id", "path": "dev#local", "key": "Debug", "value": "true"}}
        ]"#
    )
    .unwrap();

    let store = SettingsStore::load(file.path()).unwrap();
    assert_eq!(store.list()[2].id, "custom-id");

    // Siblings follow record id order, so "custom-id" lands first
    let config = EffectiveConfig::build(None, None, None).unwrap();
    let text = render_text(&store.forest().unwrap(), &RenderOptions::from_config(&config));
    assert_eq!(
        text,
        "dev/\n  local/\n    Debug = true\n    Db/\n      Password = [REDACTED]\n      Port = 5432\n"
    );
}

#[test]
fn test_load_missing_file() {
    let err = SettingsStore::load(std::path::Path::new("/nonexistent/settings.json")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}
