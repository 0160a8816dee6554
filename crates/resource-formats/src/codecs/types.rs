//! Common format trait and errors.

use serde_json::Value;
use thiserror::Error;

use crate::{EncodeInput, EncodeOptions, FormatId};

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("expected an object for attributes, got {0}")]
    NotAnObject(&'static str),
    #[error("unexpected document shape: {0}")]
    UnexpectedShape(String),
    #[error("unknown format `{0}`")]
    UnknownFormat(String),
}

/// A wire format used to exchange resources with a remote service.
///
/// Implementations hold no state between calls and may be shared across
/// threads.
pub trait ResourceFormat: Send + Sync {
    fn id(&self) -> FormatId;
    /// File extension used in resource paths, e.g. `/people/1.json`.
    fn extension(&self) -> &'static str;
    fn mime_type(&self) -> &'static str;
    fn encode(&self, value: &EncodeInput, options: Option<&EncodeOptions>)
        -> Result<String, FormatError>;
    fn decode(&self, text: &str) -> Result<Value, FormatError>;
}

pub(crate) fn parse_json(text: &str) -> Result<Value, FormatError> {
    serde_json::from_str(text).map_err(FormatError::Parse)
}
