//! Outgoing HTTP response type.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderMap, HeaderValue, StatusCode};
use http_body_util::Full;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

const NOT_FOUND_BODY: &[u8] = b"404 page not found\n";

/// An outgoing HTTP response.
///
/// ```rust
/// use healthz::Response;
///
/// assert_eq!(Response::text("ok").body(), b"ok");
/// assert_eq!(Response::not_found().status(), 404);
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// `200 OK` with a `text/plain; charset=utf-8` body.
    pub fn text(body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
        Self { status: StatusCode::OK, headers, body: body.into() }
    }

    /// The response for a path with no route: `404`, plain-text body,
    /// `x-content-type-options: nosniff`.
    pub fn not_found() -> Self {
        let mut res = Self::text(Bytes::from_static(NOT_FOUND_BODY));
        res.status = StatusCode::NOT_FOUND;
        res.headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        res
    }

    /// The status code.
    pub fn status(&self) -> StatusCode { self.status }

    /// Response headers. `content-length` is not among them; hyper adds it
    /// from the body.
    pub fn headers(&self) -> &HeaderMap { &self.headers }

    /// The body bytes, exactly as written to the wire.
    pub fn body(&self) -> &[u8] { &self.body }

    /// Converts into the type hyper writes to the wire. Content-length is
    /// derived from the `Full` body.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers;
        res
    }
}
