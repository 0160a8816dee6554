//! Format identifiers and the extension and MIME type they share.

use std::fmt;
use std::str::FromStr;

use crate::codecs::FormatError;

/// Symbolic identifier of a wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatId {
    Json,
    JsonApi,
}

impl FormatId {
    pub const ALL: [FormatId; 2] = [FormatId::Json, FormatId::JsonApi];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatId::Json => "json",
            FormatId::JsonApi => "json_api",
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatId {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(FormatId::Json),
            "json_api" => Ok(FormatId::JsonApi),
            other => Err(FormatError::UnknownFormat(other.to_owned())),
        }
    }
}

pub const JSON_EXTENSION: &str = "json";
pub const JSON_MIME_TYPE: &str = "application/json";
