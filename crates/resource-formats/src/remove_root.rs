//! Single-key root stripping shared by every format on decode.

use serde_json::Value;

/// Strips one layer of single-key root wrapping.
///
/// An object with exactly one key is replaced by the value under that key.
/// Anything else, including an object with zero or several keys, is returned
/// as-is. Only the outermost layer is ever removed.
pub fn remove_root(value: Value) -> Value {
    match value {
        Value::Object(map) if map.len() == 1 => match map.into_iter().next() {
            Some((_, inner)) => inner,
            None => Value::Null,
        },
        other => other,
    }
}
