//! # healthz
//!
//! A liveness endpoint and nothing else.
//!
//! One path, one body, one port:
//!
//! | Method | Path | Status | Body |
//! |---|---|---|---|
//! | any | `/api/healthz` | 200 | `ok` |
//! | any | anything else | 404 | `404 page not found\n` |
//!
//! Connection handling (keep-alive, malformed requests, client resets) is
//! hyper's job. Nothing here is configurable: the address and the path are
//! compiled in.
//!
//! ```rust,no_run
//! use healthz::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), healthz::Error> {
//!     Server::bind(healthz::ADDR).await?.serve(healthz::app()).await;
//!     Ok(())
//! }
//! ```

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

mod error;
mod request;
mod response;
mod router;
mod server;

pub mod health;

pub use error::Error;
pub use health::{HEALTH_BODY, HEALTH_PATH};
pub use request::Request;
pub use response::Response;
pub use router::{Handler, Router};
pub use server::Server;

/// The port the binary listens on.
pub const PORT: u16 = 8080;

/// All interfaces, [`PORT`].
pub const ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, PORT));

/// The application: [`HEALTH_PATH`] answered by [`health::healthz`] for every
/// method. Every other path is a 404.
pub fn app() -> Router {
    Router::new().route(HEALTH_PATH, health::healthz)
}
