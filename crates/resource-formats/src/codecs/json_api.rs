//! JSON:API style envelope format.
//!
//! A single resource goes on the wire as `{"data":{"attributes":{...}}}` and
//! a collection as `{"data":[{"attributes":{...}}, ...]}`. Decoding strips a
//! single root key only, so `decode` of an encoded resource still carries the
//! `attributes` wrapper; [`JsonApiFormat::decode_resources`] removes that too.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::attributes::value_kind;
use crate::constants::{JSON_EXTENSION, JSON_MIME_TYPE};
use crate::serialize::to_json_text;
use crate::{remove_root, AttributeMap, EncodeInput, EncodeOptions, FormatId};

use super::types::{parse_json, FormatError, ResourceFormat};

const DATA_KEY: &str = "data";
const ATTRIBUTES_KEY: &str = "attributes";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonApiFormat;

impl JsonApiFormat {
    pub fn new() -> Self {
        Self
    }

    pub fn id(&self) -> FormatId {
        FormatId::JsonApi
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
        let data = match value {
            EncodeInput::Single(map) => wrap_attributes(map),
            EncodeInput::Collection(maps) => {
                Value::Array(maps.iter().map(wrap_attributes).collect())
            }
        };
        let mut envelope = Map::with_capacity(1);
        envelope.insert(DATA_KEY.to_owned(), data);
        debug!(
            resources = value.maps().len(),
            collection = value.is_collection(),
            "encoding json:api document"
        );
        to_json_text(&Value::Object(envelope), options)
    }

    pub fn decode(&self, text: &str) -> Result<Value, FormatError> {
        debug!(bytes = text.len(), "decoding json:api document");
        Ok(remove_root(parse_json(text)?))
    }

    /// Decodes `text` and unwraps the `attributes` layer of every resource.
    ///
    /// Accepts the output of [`JsonApiFormat::encode`]: after the root key is
    /// stripped the value must be one `{"attributes": {...}}` wrapper or an
    /// array of them.
    pub fn decode_resources(&self, text: &str) -> Result<EncodeInput, FormatError> {
        match self.decode(text)? {
            Value::Array(items) => {
                let maps = items
                    .into_iter()
                    .map(unwrap_attributes)
                    .collect::<Result<Vec<_>, _>>()?;
                trace!(resources = maps.len(), "unwrapped resource collection");
                Ok(EncodeInput::Collection(maps))
            }
            other => Ok(EncodeInput::Single(unwrap_attributes(other)?)),
        }
    }
}

fn wrap_attributes(attributes: &AttributeMap) -> Value {
    let mut wrapper = Map::with_capacity(1);
    wrapper.insert(ATTRIBUTES_KEY.to_owned(), Value::Object(attributes.clone()));
    Value::Object(wrapper)
}

fn unwrap_attributes(wrapper: Value) -> Result<AttributeMap, FormatError> {
    let mut wrapper = match wrapper {
        Value::Object(map) => map,
        other => {
            return Err(FormatError::UnexpectedShape(format!(
                "resource wrapper must be an object, got {}",
                value_kind(&other)
            )))
        }
    };
    match wrapper.remove(ATTRIBUTES_KEY) {
        Some(Value::Object(attributes)) => Ok(attributes),
        Some(other) => Err(FormatError::NotAnObject(value_kind(&other))),
        None => Err(FormatError::UnexpectedShape(format!(
            "missing `{ATTRIBUTES_KEY}` key"
        ))),
    }
}

impl ResourceFormat for JsonApiFormat {
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
