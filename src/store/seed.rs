//! Bundled sample dataset
//!
//! Deployment settings for a handful of `test#us-west-2#*` environments,
//! used when no input file is configured.

use settings_tree::Setting;

use super::StoreError;

const SAMPLE_SETTINGS_JSON: &str = include_str!("../../data/sample_settings.json");

/// Raw sample records, ids not yet assigned.
pub fn sample_settings() -> Result<Vec<Setting>, StoreError> {
    Ok(serde_json::from_str(SAMPLE_SETTINGS_JSON)?)
}
