//! Forest rendering
//!
//! Text outline for terminals and JSON for other tools.

mod text;

pub use text::render_text;

use serde::{Deserialize, Serialize};
use settings_tree::TreeNode;

use crate::config::{BuiltinDefaults, EffectiveConfig};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Format selected by `output.format`, text when unset
    pub fn from_config(config: &EffectiveConfig) -> Self {
        config
            .get_str("output.format")
            .and_then(Self::parse)
            .unwrap_or(OutputFormat::Text)
    }
}

/// Options for the text outline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per level
    pub indent: usize,
    /// Print `name = value` for settings
    pub show_values: bool,
    /// Levels to print, 0 for all
    pub max_depth: usize,
    /// Mask values of keys matching `secret_markers`
    pub redact_secrets: bool,
    /// Lowercase key-name fragments considered secret
    pub secret_markers: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let defaults = BuiltinDefaults::default();
        Self {
            indent: defaults.indent as usize,
            show_values: defaults.show_values,
            max_depth: defaults.max_depth as usize,
            redact_secrets: defaults.redact_secrets,
            secret_markers: defaults.secret_markers,
        }
    }
}

impl RenderOptions {
    /// Read `render.*` from the effective config, falling back to defaults
    pub fn from_config(config: &EffectiveConfig) -> Self {
        let defaults = Self::default();
        let secret_markers = config
            .get("render.secret_markers")
            .map(|_| {
                config
                    .get_str_list("render.secret_markers")
                    .into_iter()
                    .map(|m| m.to_lowercase())
                    .collect()
            })
            .unwrap_or(defaults.secret_markers);

        Self {
            indent: config
                .get_u64("render.indent")
                .map(|n| n as usize)
                .unwrap_or(defaults.indent),
            show_values: config
                .get_bool("render.show_values")
                .unwrap_or(defaults.show_values),
            max_depth: config
                .get_u64("render.max_depth")
                .map(|n| n as usize)
                .unwrap_or(defaults.max_depth),
            redact_secrets: config
                .get_bool("render.redact_secrets")
                .unwrap_or(defaults.redact_secrets),
            secret_markers,
        }
    }

    /// Whether the value under `key_name` should be masked
    pub fn is_secret(&self, key_name: &str) -> bool {
        if !self.redact_secrets {
            return false;
        }
        let lower = key_name.to_lowercase();
        self.secret_markers.iter().any(|m| lower.contains(m.as_str()))
    }
}

/// Pretty JSON of a forest
pub fn render_json(forest: &[TreeNode]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(forest)
}
