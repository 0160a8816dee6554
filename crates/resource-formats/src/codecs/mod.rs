//! Resource wire formats and the registry that maps identifiers to them.

mod json;
mod json_api;
mod registry;
mod types;

pub use json::JsonFormat;
pub use json_api::JsonApiFormat;
pub use registry::Formats;
pub use types::{FormatError, ResourceFormat};
