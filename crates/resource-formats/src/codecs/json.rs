//! Plain JSON format: attributes on the wire exactly as given.

use serde_json::Value;
use tracing::debug;

use crate::constants::{JSON_EXTENSION, JSON_MIME_TYPE};
use crate::serialize::to_json_text;
use crate::{remove_root, EncodeInput, EncodeOptions, FormatId};

use super::types::{parse_json, FormatError, ResourceFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        Self
    }

    pub fn id(&self) -> FormatId {
        FormatId::Json
    }

    pub fn extension(&self) -> &'static str {
        JSON_EXTENSION
    }

    pub fn mime_type(&self) -> &'static str {
        JSON_MIME_TYPE
    }

    pub fn encode(
        &self,
        value: &EncodeInput,
        options: Option<&EncodeOptions>,
    ) -> Result<String, FormatError> {
        let doc = match value {
            EncodeInput::Single(map) => Value::Object(map.clone()),
            EncodeInput::Collection(maps) => {
                Value::Array(maps.iter().cloned().map(Value::Object).collect())
            }
        };
        debug!(resources = value.maps().len(), "encoding json document");
        to_json_text(&doc, options)
    }

    pub fn decode(&self, text: &str) -> Result<Value, FormatError> {
        debug!(bytes = text.len(), "decoding json document");
        Ok(remove_root(parse_json(text)?))
    }
}

impl ResourceFormat for JsonFormat {
    fn id(&self) -> FormatId {
        self.id()
    }

    fn extension(&self) -> &'static str {
        self.extension()
    }

    fn mime_type(&self) -> &'static str {
        self.mime_type()
    }

    fn encode(
        &self,
        value: &EncodeInput,
        options: Option<&EncodeOptions>,
    ) -> Result<String, FormatError> {
        self.encode(value, options)
    }

    fn decode(&self, text: &str) -> Result<Value, FormatError> {
        self.decode(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> crate::AttributeMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn encodes_single_as_is() {
        let input = EncodeInput::Single(map(json!({"person": {"id": 2, "name": "David"}})));
        let text = JsonFormat.encode(&input, None).unwrap();
        assert_eq!(text, r#"{"person":{"id":2,"name":"David"}}"#);
    }

    #[test]
    fn encodes_collection_as_array() {
        let input = EncodeInput::Collection(vec![map(json!({"id": 1})), map(json!({"id": 2}))]);
        assert_eq!(JsonFormat.encode(&input, None).unwrap(), r#"[{"id":1},{"id":2}]"#);
    }

    #[test]
    fn decode_strips_root() {
        let decoded = JsonFormat.decode(r#"{"person":{"id":2,"name":"David"}}"#).unwrap();
        assert_eq!(decoded, json!({"id": 2, "name": "David"}));
    }

    #[test]
    fn decode_reports_parse_error() {
        assert!(matches!(JsonFormat.decode("{invalid"), Err(FormatError::Parse(_))));
    }
}
