//! Settings tree compaction.
//!
//! Folds a flat collection of `(path, key, value)` setting records into a
//! deduplicated tree. Paths are `#`-delimited, keys are `.`- or
//! `:`-delimited, and every node is identified by the accumulated id of the
//! segments leading to it, so rebuilding from the same records always yields
//! the same node ids in the same order.
//!
//! ```
//! use settings_tree::{build_forest, insert_ids, Setting};
//!
//! let records = insert_ids(&[Setting::new("prod#eu-west-1", "Cache.Port", "11211").unwrap()]).unwrap();
//! let forest = build_forest(&records).unwrap();
//! let port = settings_tree::find_node(&forest, "prod#eu-west-1#Cache#Port").unwrap();
//! assert_eq!(port.value(), Some("11211"));
//! ```

mod collate;
mod compact;
mod error;
mod node;
mod setting;

pub use collate::locale_cmp;
pub use compact::{build_forest, compact, compare_records, sort_records};
pub use error::{TreeError, MIN_PATH_SEGMENTS};
pub use node::{find_node, ForestStats, NodeKind, TreeNode, Walk};
pub use setting::{
    insert_ids, synthesize_id, validate_path, Setting, KEY_DELIMITERS, PATH_DELIMITER,
};
