//! Generic JSON text step shared by all formats.
//!
//! Formats build a [`Value`] and hand it here together with the caller's
//! [`EncodeOptions`], which they never look at themselves.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::codecs::FormatError;

/// Options forwarded from `encode` to the serializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Indented output instead of compact.
    pub pretty: bool,
    /// Keep only these keys in every mapping.
    pub only: Option<Vec<String>>,
    /// Drop these keys from every mapping. Ignored when `only` is set.
    pub except: Option<Vec<String>>,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn only<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            only: Some(keys.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn except<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            except: Some(keys.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    fn filters_keys(&self) -> bool {
        self.only.is_some() || self.except.is_some()
    }

    fn keeps(&self, key: &str) -> bool {
        if let Some(only) = &self.only {
            return only.iter().any(|k| k == key);
        }
        if let Some(except) = &self.except {
            return !except.iter().any(|k| k == key);
        }
        true
    }
}

/// Serializes `value` to JSON text, applying `options` if given.
pub fn to_json_text(value: &Value, options: Option<&EncodeOptions>) -> Result<String, FormatError> {
    let Some(options) = options else {
        return serde_json::to_string(value).map_err(FormatError::Serialization);
    };
    let filtered;
    let value = if options.filters_keys() {
        filtered = filter_keys(value, options);
        &filtered
    } else {
        value
    };
    let text = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(FormatError::Serialization)
}

fn filter_keys(value: &Value, options: &EncodeOptions) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, val) in map {
                if options.keeps(key) {
                    out.insert(key.clone(), filter_keys(val, options));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(|v| filter_keys(v, options)).collect()),
        other => other.clone(),
    }
}
