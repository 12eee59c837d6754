//! Settings Explorer - browse flat configuration settings as a tree
//!
//! Loads `(path, key, value)` setting records, folds them into a tree with
//! the `settings-tree` compactor and renders the result for inspection.
//! Edits are applied to an in-memory store and exported as JSON.

pub mod config;
pub mod logging;
pub mod render;
pub mod store;

pub use config::{ConfigError, EffectiveConfig};
pub use render::{render_json, render_text, OutputFormat, RenderOptions};
pub use settings_tree::{build_forest, find_node, insert_ids, ForestStats, NodeKind, Setting, TreeNode};
pub use store::{DeleteAck, SettingsStore, StoreError};
