//! Built-in defaults (layer 1)

use serde::{Deserialize, Serialize};

/// Key-name fragments whose values are masked in text output.
pub const DEFAULT_SECRET_MARKERS: &[&str] = &[
    "password",
    "secret",
    "token",
    "api_key",
    "apikey",
    "credential",
    "private_key",
    "connectionstring",
];

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Settings file to browse (default: none, use the bundled sample)
    pub input: Option<String>,

    /// Output format (default: "text")
    pub output_format: String,

    /// Spaces per tree level (default: 2)
    pub indent: u64,

    /// Print setting values next to their names (default: true)
    pub show_values: bool,

    /// Levels to expand, 0 for all (default: 0)
    pub max_depth: u64,

    /// Mask values of secret-looking keys (default: true)
    pub redact_secrets: bool,

    /// Key fragments treated as secret
    pub secret_markers: Vec<String>,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            input: None,
            output_format: "text".to_string(),
            indent: 2,
            show_values: true,
            max_depth: 0,
            redact_secrets: true,
            secret_markers: DEFAULT_SECRET_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "input": self.input,
            "output": {
                "format": self.output_format
            },
            "render": {
                "indent": self.indent,
                "show_values": self.show_values,
                "max_depth": self.max_depth,
                "redact_secrets": self.redact_secrets,
                "secret_markers": self.secret_markers
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = BuiltinDefaults::default();
        assert!(defaults.input.is_none());
        assert_eq!(defaults.output_format, "text");
        assert_eq!(defaults.indent, 2);
        assert!(defaults.show_values);
        assert_eq!(defaults.max_depth, 0);
        assert!(defaults.redact_secrets);
        assert!(defaults.secret_markers.contains(&"password".to_string()));
    }

    #[test]
    fn test_to_value() {
        let value = BuiltinDefaults::default().to_value();

        assert!(value["input"].is_null());
        assert_eq!(value["output"]["format"], "text");
        assert_eq!(value["render"]["indent"], 2);
        assert_eq!(value["render"]["redact_secrets"], true);
        assert!(value["render"]["secret_markers"].is_array());
    }
}
