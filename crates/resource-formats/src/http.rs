//! HTTP header that carries the format for each request verb.

/// Request verbs issued against a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Reads advertise the format in `Accept`; writes declare it in
/// `Content-Type`.
pub fn format_header_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get | HttpMethod::Head | HttpMethod::Delete => ACCEPT,
        HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch => CONTENT_TYPE,
    }
}
