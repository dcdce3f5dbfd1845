//! Incoming HTTP request type.

use http::Uri;
use http::request::Parts;

/// The part of an incoming request that routing looks at.
///
/// Method, headers and body are never consulted; hyper drains or discards
/// the body.
pub struct Request {
    uri: Uri,
}

impl Request {
    pub(crate) fn new(parts: Parts) -> Self {
        Self { uri: parts.uri }
    }

    /// The raw URI path, without the query string and without
    /// percent-decoding.
    pub fn path(&self) -> &str {
        self.uri.path()
    }
}

#[cfg(test)]
pub(crate) fn test_request(method: &str, uri: &str) -> Request {
    let (parts, ()) = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(())
        .unwrap()
        .into_parts();
    Request::new(parts)
}
