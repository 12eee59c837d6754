//! Layer merging for the effective config.
//!
//! Builtin defaults, the user file, the project file and CLI flags are
//! folded in that order. A table such as `[render]` in a later layer only
//! overrides the keys it names; a list such as `render.secret_markers` is
//! taken whole from the last layer that sets it.

use serde_json::Value;

/// Overlay `layer` onto `base`.
///
/// Tables merge key by key; every other value, lists and `null` included,
/// comes from `layer`.
pub fn deep_merge(base: Value, layer: Value) -> Value {
    let Value::Object(layer_table) = layer else {
        return layer;
    };
    let Value::Object(mut table) = base else {
        return Value::Object(layer_table);
    };

    for (key, value) in layer_table {
        let merged = match table.remove(&key) {
            Some(existing) => deep_merge(existing, value),
            None => value,
        };
        table.insert(key, merged);
    }
    Value::Object(table)
}

/// Fold config layers, lowest precedence first.
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}
