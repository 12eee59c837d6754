//! Tree mapping over the bundled sample dataset
//!
//! - Every deployment path becomes a node under `test#us-west-2`
//! - Setting leaves carry the record value and payload
//! - Ids are stable across rebuilds

use settings_explorer::{find_node, ForestStats, NodeKind, SettingsStore, TreeNode};

const DEPLOYMENTS: &[&str] = &[
    "test#us-west-2#qa1",
    "test#us-west-2#qa3svc",
    "test#us-west-2#deployment-813aad7",
    "test#us-west-2#branch-8528",
    "test#us-west-2#qa1svc",
    "test#us-west-2#qa2svc",
    "test#us-west-2#qa2",
    "test#us-west-2#web",
    "test#us-west-2#deployment-d7d6a10b6df09e271684",
    "test#us-west-2#build-13139",
    "test#us-west-2#deployment-23c522f",
    "test#us-west-2#devsvc",
    "test#us-west-2#deployment-084a6ee",
    "test#us-west-2#qa3",
    "test#us-west-2#deployment-0442cdb",
    "test#us-west-2#deployment-b6eab09",
    "test#us-west-2#deployment-e053747",
    "test#us-west-2#branch-master",
    "test#us-west-2#deployment-135f5d4",
    "test#us-west-2#branch-current",
];

fn sample_forest() -> Vec<TreeNode> {
    SettingsStore::sample().unwrap().forest().unwrap()
}

#[test]
fn test_find_expected_settings_in_tree() {
    let forest = sample_forest();

    assert!(find_node(&forest, "test#us-west-2#missing").is_none());
    for id in DEPLOYMENTS {
        let node = find_node(&forest, id);
        assert!(node.is_some(), "missing node {}", id);
        assert_eq!(node.unwrap().kind, NodeKind::Path);
    }
}

#[test]
fn test_single_root_and_region() {
    let forest = sample_forest();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].id, "test");
    assert_eq!(forest[0].children.len(), 1);

    let region = &forest[0].children[0];
    assert_eq!(region.id, "test#us-west-2");
    assert_eq!(region.children.len(), DEPLOYMENTS.len());
}

#[test]
fn test_deployments_sorted() {
    let forest = sample_forest();
    let names: Vec<&str> = forest[0].children[0]
        .children
        .iter()
        .map(|n| n.name.as_str())
        .collect();

    assert_eq!(names.first(), Some(&"branch-8528"));
    assert_eq!(names.last(), Some(&"web"));
    let qa1 = names.iter().position(|n| *n == "qa1").unwrap();
    let qa1svc = names.iter().position(|n| *n == "qa1svc").unwrap();
    let qa2 = names.iter().position(|n| *n == "qa2").unwrap();
    assert!(qa1 < qa1svc && qa1svc < qa2);
}

#[test]
fn test_setting_leaf_values() {
    let forest = sample_forest();

    let strategy = find_node(
        &forest,
        "test#us-west-2#qa1#MemcachedClientConfigSettings#Strategy",
    )
    .unwrap();
    assert_eq!(strategy.value(), Some("ElastiCache"));
    let payload = strategy.payload.as_ref().unwrap();
    assert_eq!(payload.path, "test#us-west-2#qa1");
    assert_eq!(payload.key, "MemcachedClientConfigSettings.Strategy");
    assert_eq!(
        payload.id,
        "test#us-west-2#qa1#MemcachedClientConfigSettings.Strategy"
    );

    let group = find_node(&forest, "test#us-west-2#qa1#ServerConfig").unwrap();
    assert_eq!(group.kind, NodeKind::Group);
    assert!(group.payload.is_none());

    let update = find_node(&forest, "test#us-west-2#branch-master#Update").unwrap();
    assert_eq!(update.value(), Some("true"));
    assert!(update.is_leaf());

    let empty = find_node(&forest, "test#us-west-2#qa1#ServerConfig#EmailParserLambdaSnsTopic")
        .unwrap();
    assert_eq!(empty.value(), Some(""));
}

#[test]
fn test_every_record_is_a_setting_node() {
    let store = SettingsStore::sample().unwrap();
    let forest = store.forest().unwrap();
    let stats = ForestStats::collect(&forest);

    assert_eq!(stats.settings, store.len());
    // root, region, deployments, then group, leaf
    assert_eq!(stats.depth, 5);
    assert_eq!(stats.paths, 2 + DEPLOYMENTS.len());
}

#[test]
fn test_rebuild_keeps_ids() {
    let first = sample_forest();
    let second = sample_forest();
    assert_eq!(first, second);

    let ids: Vec<&str> = first.iter().flat_map(TreeNode::walk).map(|n| n.id.as_str()).collect();
    let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}
