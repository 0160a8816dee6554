//! Attribute mappings and the encode-side input type.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::codecs::FormatError;

/// The plain key-value fields of one resource, in insertion order.
pub type AttributeMap = Map<String, Value>;

/// What a format is asked to encode: one resource or a collection of them.
///
/// Callers pick the variant up front; the codecs never inspect a value to
/// guess whether it is a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeInput {
    Single(AttributeMap),
    Collection(Vec<AttributeMap>),
}

impl EncodeInput {
    /// Converts a domain object via [`ToAttributes`].
    pub fn from_resource<T: ToAttributes + ?Sized>(resource: &T) -> Result<Self, FormatError> {
        Ok(EncodeInput::Single(resource.to_attribute_map()?))
    }

    /// Converts a slice of domain objects via [`ToAttributes`].
    pub fn from_resources<T: ToAttributes>(resources: &[T]) -> Result<Self, FormatError> {
        let maps = resources
            .iter()
            .map(ToAttributes::to_attribute_map)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EncodeInput::Collection(maps))
    }

    /// The attribute maps carried by this input, as a slice.
    pub fn maps(&self) -> &[AttributeMap] {
        match self {
            EncodeInput::Single(map) => std::slice::from_ref(map),
            EncodeInput::Collection(maps) => maps,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, EncodeInput::Collection(_))
    }
}

impl From<AttributeMap> for EncodeInput {
    fn from(map: AttributeMap) -> Self {
        EncodeInput::Single(map)
    }
}

impl From<Vec<AttributeMap>> for EncodeInput {
    fn from(maps: Vec<AttributeMap>) -> Self {
        EncodeInput::Collection(maps)
    }
}

/// Explicit conversion of a domain object into its attribute mapping.
pub trait ToAttributes {
    fn to_attribute_map(&self) -> Result<AttributeMap, FormatError>;
}

impl<T: Serialize + ?Sized> ToAttributes for T {
    fn to_attribute_map(&self) -> Result<AttributeMap, FormatError> {
        match serde_json::to_value(self).map_err(FormatError::Serialization)? {
            Value::Object(map) => Ok(map),
            other => Err(FormatError::NotAnObject(value_kind(&other))),
        }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Person {
        id: u64,
        name: &'static str,
    }

    #[test]
    fn struct_converts_to_ordered_attributes() {
        let map = Person { id: 1, name: "Matz" }.to_attribute_map().unwrap();
        assert_eq!(Value::Object(map.clone()), json!({"id": 1, "name": "Matz"}));
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "name"]);
    }

    #[test]
    fn scalar_is_rejected() {
        let err = 42_u8.to_attribute_map().unwrap_err();
        assert!(matches!(err, FormatError::NotAnObject("number")));
    }

    #[test]
    fn non_string_keys_fail_serialization() {
        let mut map = BTreeMap::new();
        map.insert(vec![1_u8], "x");
        let err = map.to_attribute_map().unwrap_err();
        assert!(matches!(err, FormatError::Serialization(_)));
    }

    #[test]
    fn from_resources_builds_collection() {
        let people = [
            Person { id: 1, name: "Matz" },
            Person { id: 2, name: "David" },
        ];
        let input = EncodeInput::from_resources(&people).unwrap();
        assert!(input.is_collection());
        assert_eq!(input.maps().len(), 2);
        assert_eq!(input.maps()[1]["name"], json!("David"));
    }

    #[test]
    fn single_exposes_one_map() {
        let input = EncodeInput::from_resource(&Person { id: 2, name: "David" }).unwrap();
        assert!(!input.is_collection());
        assert_eq!(input.maps().len(), 1);
    }
}
