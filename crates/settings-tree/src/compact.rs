//! Folds flat setting records into a deduplicated tree.

use std::cmp::Ordering;

use tracing::debug;

use crate::collate::locale_cmp;
use crate::error::TreeError;
use crate::node::{NodeKind, TreeNode};
use crate::setting::{Setting, PATH_DELIMITER};

/// Order in which records are compacted.
///
/// Ascending by id; ties broken by path, key, then value so the order does
/// not depend on how the input was arranged.
pub fn compare_records(a: &Setting, b: &Setting) -> Ordering {
    locale_cmp(&a.id, &b.id)
        .then_with(|| locale_cmp(&a.path, &b.path))
        .then_with(|| locale_cmp(&a.key, &b.key))
        .then_with(|| locale_cmp(&a.value, &b.value))
}

/// Sorted copy of `settings`.
pub fn sort_records(settings: &[Setting]) -> Vec<Setting> {
    let mut ordered = settings.to_vec();
    ordered.sort_by(compare_records);
    ordered
}

/// Build the top-level forest for `settings`.
///
/// Records must already carry ids (see [`crate::insert_ids`]). The input is
/// not modified.
pub fn build_forest(settings: &[Setting]) -> Result<Vec<TreeNode>, TreeError> {
    let ordered = sort_records(settings);
    let root = compact(&ordered)?;
    debug!(
        records = settings.len(),
        top_level = root.children.len(),
        nodes = root.node_count() - 1,
        "built settings forest"
    );
    Ok(root.children)
}

/// Compact records into a tree under the synthetic root, in the order given.
pub fn compact(settings: &[Setting]) -> Result<TreeNode, TreeError> {
    let mut root = TreeNode::root();

    for setting in settings {
        if setting.is_missing_id() {
            return Err(TreeError::MalformedInput {
                path: setting.path.clone(),
                key: setting.key.clone(),
            });
        }
        insert(&mut root, setting);
    }

    Ok(root)
}

fn insert(root: &mut TreeNode, setting: &Setting) {
    let mut current = root;
    let mut full_id = String::new();

    for (index, part) in setting.path_segments().enumerate() {
        if index > 0 {
            full_id.push(PATH_DELIMITER);
        }
        full_id.push_str(part);
        current = find_or_create(current, &full_id, part, NodeKind::Path);
    }

    let mut parts = setting.key_segments().peekable();
    while let Some(part) = parts.next() {
        full_id.push(PATH_DELIMITER);
        full_id.push_str(part);

        if parts.peek().is_some() {
            current = find_or_create(current, &full_id, part, NodeKind::Group);
        } else {
            let node = find_or_create(current, &full_id, part, NodeKind::Group);
            node.kind = NodeKind::Setting {
                value: setting.value.clone(),
            };
            node.payload = Some(setting.clone());
            return;
        }
    }
}

/// Child of `parent` with `id`, created with `kind` when absent.
///
/// An existing child is returned as-is.
fn find_or_create<'a>(
    parent: &'a mut TreeNode,
    id: &str,
    name: &str,
    kind: NodeKind,
) -> &'a mut TreeNode {
    let index = match parent.children.iter().position(|child| child.id == id) {
        Some(index) => index,
        None => {
            parent.children.push(TreeNode::new(id, name, kind));
            parent.children.len() - 1
        }
    };
    &mut parent.children[index]
}
