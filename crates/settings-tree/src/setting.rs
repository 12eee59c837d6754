//! Setting records and identity assignment.

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, MIN_PATH_SEGMENTS};

/// Separator between path segments, and between segments of a node id.
pub const PATH_DELIMITER: char = '#';

/// Separators between key segments.
pub const KEY_DELIMITERS: &[char] = &['.', ':'];

/// A single flat configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Setting {
    /// Unique identifier. Empty until identity assignment fills it.
    #[serde(default)]
    pub id: String,

    /// Hierarchical location, `#`-delimited (e.g. `test#us-west-2#qa1`).
    pub path: String,

    /// Property name within the location, `.`- or `:`-delimited.
    pub key: String,

    /// Opaque payload.
    #[serde(default)]
    pub value: String,
}

impl Setting {
    /// Construct a record with a synthesized id, validating the path.
    pub fn new(
        path: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, TreeError> {
        let path = path.into();
        let key = key.into();
        validate_path(&path)?;

        Ok(Self {
            id: synthesize_id(&path, &key),
            path,
            key,
            value: value.into(),
        })
    }

    /// Whether the record still needs an id.
    pub fn is_missing_id(&self) -> bool {
        self.id.is_empty()
    }

    /// Path split into its segments.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(PATH_DELIMITER)
    }

    /// Key split into its segments. An empty key yields one empty segment.
    pub fn key_segments(&self) -> impl Iterator<Item = &str> {
        self.key.split(KEY_DELIMITERS)
    }

    /// Id of the tree node this record terminates at.
    pub fn terminal_id(&self) -> String {
        let mut id = self.path.clone();
        for segment in self.key_segments() {
            id.push(PATH_DELIMITER);
            id.push_str(segment);
        }
        id
    }

    /// Whether two records describe the same logical setting.
    pub fn same_setting(&self, path: &str, key: &str) -> bool {
        self.path == path && self.key == key
    }
}

/// Reject paths with fewer than two segments.
pub fn validate_path(path: &str) -> Result<(), TreeError> {
    let segments = path.split(PATH_DELIMITER).count();
    if segments < MIN_PATH_SEGMENTS {
        return Err(TreeError::InvalidPath {
            path: path.to_string(),
            segments,
        });
    }
    Ok(())
}

/// Default id for a record: `path#key`.
pub fn synthesize_id(path: &str, key: &str) -> String {
    format!("{}{}{}", path, PATH_DELIMITER, key)
}

/// Fill in missing ids, validating every path.
///
/// Output has the same length and order as the input. Records that already
/// carry an id keep it.
pub fn insert_ids(settings: &[Setting]) -> Result<Vec<Setting>, TreeError> {
    settings
        .iter()
        .map(|s| {
            validate_path(&s.path)?;
            let mut out = s.clone();
            if out.is_missing_id() {
                out.id = synthesize_id(&out.path, &out.key);
            }
            Ok(out)
        })
        .collect()
}
