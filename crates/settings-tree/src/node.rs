//! Tree node model.

use serde::{Deserialize, Serialize};

use crate::setting::Setting;

/// Role of a node in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    /// Created while consuming path segments.
    Path,
    /// Created while consuming a non-terminal key segment.
    Group,
    /// Terminal key segment of at least one record.
    Setting { value: String },
}

impl NodeKind {
    /// Lowercase name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Path => "path",
            NodeKind::Group => "group",
            NodeKind::Setting { .. } => "setting",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the compacted settings tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Accumulated id from the root, unique within a tree.
    pub id: String,

    /// The segment this node contributes.
    pub name: String,

    #[serde(flatten)]
    pub kind: NodeKind,

    /// Originating record, set on the terminal node of each record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Setting>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a childless node.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            payload: None,
            children: Vec::new(),
        }
    }

    /// The synthetic root: `id = ""`, `name = "root"`.
    pub fn root() -> Self {
        Self::new("", "root", NodeKind::Path)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_setting(&self) -> bool {
        matches!(self.kind, NodeKind::Setting { .. })
    }

    /// Value carried by a setting node.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Setting { value } => Some(value),
            _ => None,
        }
    }

    /// Depth-first search for `id` in this subtree, including `self`.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        find_node(&self.children, id)
    }

    /// Pre-order iterator over this subtree.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of setting nodes in this subtree.
    pub fn setting_count(&self) -> usize {
        self.walk().filter(|n| n.is_setting()).count()
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }
}

/// Search a forest for the node with `id`.
pub fn find_node<'a>(forest: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    forest.iter().find_map(|n| n.find(id))
}

/// Pre-order traversal, see [`TreeNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Summary counts over a forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    pub nodes: usize,
    pub paths: usize,
    pub groups: usize,
    pub settings: usize,
    pub depth: usize,
}

impl ForestStats {
    pub fn collect(forest: &[TreeNode]) -> Self {
        let mut stats = ForestStats::default();
        for top in forest {
            stats.depth = stats.depth.max(top.depth());
            for node in top.walk() {
                stats.nodes += 1;
                match node.kind {
                    NodeKind::Path => stats.paths += 1,
                    NodeKind::Group => stats.groups += 1,
                    NodeKind::Setting { .. } => stats.settings += 1,
                }
            }
        }
        stats
    }
}
