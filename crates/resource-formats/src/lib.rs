//! Wire formats for remote resource clients.
//!
//! Two formats share the same extension and MIME type:
//!
//! - [`JsonFormat`] puts attribute mappings on the wire as-is.
//! - [`JsonApiFormat`] wraps them in a `{"data": {"attributes": ...}}`
//!   envelope.
//!
//! Both decode by parsing the text and stripping one single-key root layer
//! (see [`remove_root`]). Formats are stateless; [`Formats`] holds one of each
//! and resolves them by [`FormatId`].
//!
//! ```
//! use resource_formats::{EncodeInput, FormatId, Formats, ResourceFormat};
//! use serde_json::json;
//!
//! let formats = Formats::new();
//! let attrs = json!({"id": 1, "name": "Matz"}).as_object().cloned().unwrap();
//! let text = formats
//!     .get(FormatId::JsonApi)
//!     .encode(&EncodeInput::Single(attrs), None)
//!     .unwrap();
//! assert_eq!(text, r#"{"data":{"attributes":{"id":1,"name":"Matz"}}}"#);
//! ```

mod attributes;
mod constants;
mod remove_root;

pub mod codecs;
pub mod http;
pub mod serialize;

pub use attributes::{AttributeMap, EncodeInput, ToAttributes};
pub use codecs::{FormatError, Formats, JsonApiFormat, JsonFormat, ResourceFormat};
pub use constants::{FormatId, JSON_EXTENSION, JSON_MIME_TYPE};
pub use remove_root::remove_root;
pub use serialize::EncodeOptions;
