//! Registry of available formats.

use crate::FormatId;

use super::{FormatError, JsonApiFormat, JsonFormat, ResourceFormat};

/// One instance of every format, looked up by [`FormatId`].
///
/// Build it once and pass it by reference to whatever needs a format.
#[derive(Debug, Default)]
pub struct Formats {
    pub json: JsonFormat,
    pub json_api: JsonApiFormat,
}

impl Formats {
    pub fn new() -> Self {
        Self {
            json: JsonFormat::new(),
            json_api: JsonApiFormat::new(),
        }
    }

    pub fn get(&self, id: FormatId) -> &dyn ResourceFormat {
        match id {
            FormatId::Json => &self.json,
            FormatId::JsonApi => &self.json_api,
        }
    }

    /// Resolves a symbolic name such as `"json_api"`.
    pub fn lookup(&self, name: &str) -> Result<&dyn ResourceFormat, FormatError> {
        Ok(self.get(name.parse()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ResourceFormat> + '_ {
        FormatId::ALL.into_iter().map(move |id| self.get(id))
    }
}
