//! The liveness handler.
//!
//! If the process can answer HTTP, it is alive. The handler has no
//! dependencies and ignores the method, headers and body.

use crate::{Request, Response};

/// The only routed path.
pub const HEALTH_PATH: &str = "/api/healthz";

/// The response body: two bytes, no trailing newline.
pub const HEALTH_BODY: &[u8] = b"ok";

/// Always `200 OK` with body [`HEALTH_BODY`].
pub fn healthz(_req: &Request) -> Response {
    Response::text(HEALTH_BODY)
}
