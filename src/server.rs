//! The listener and the accept loop.
//!
//! Binding is a separate step from serving so that a port conflict is
//! reported before anything else happens, and so tests can bind port 0 and
//! ask for the address they got.
//!
//! Once serving, the server never returns. Each accepted connection gets its
//! own task; hyper owns everything from there (keep-alive, pipelining,
//! rejecting malformed requests). No timeouts are configured.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::request::Request;
use crate::router::Router;

/// A bound HTTP server.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds a TCP listener on `addr`.
    ///
    /// Fails if the address is in use or cannot be bound (e.g. a privileged
    /// port). There is no retry.
    ///
    /// ```rust,no_run
    /// # async fn run() -> Result<(), healthz::Error> {
    /// let server = healthz::Server::bind(healthz::ADDR).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| Error::bind(addr, e))?;
        Ok(Self { listener })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections and dispatches them through `router`, forever.
    pub async fn serve(self, router: Router) {
        // Shared read-only by every connection task.
        let router = Arc::new(router);

        match self.listener.local_addr() {
            Ok(addr) => info!(%addr, "healthz listening"),
            Err(_) => info!("healthz listening"),
        }

        let mut backoff = AcceptBackoff::new();

        loop {
            let (stream, remote_addr) = match self.listener.accept().await {
                Ok(v) => {
                    backoff.reset();
                    v
                }
                Err(e) => {
                    // Usually fd exhaustion. Wait for connections to close
                    // rather than spinning on the error.
                    let delay = backoff.fail();
                    error!(retry_in = ?delay, "accept error: {e}");
                    tokio::time::sleep(delay).await;
                    continue;
                }
            };

            let router = Arc::clone(&router);
            // Adapts tokio's AsyncRead/AsyncWrite to hyper's IO traits.
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // Called once per request on the connection, not once per
                // connection.
                let svc = service_fn(move |req| dispatch(Arc::clone(&router), req));

                // HTTP/1.1 with keep-alive, or HTTP/2 with prior knowledge.
                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    debug!(peer = %remote_addr, "connection error: {e}");
                }
            });
        }
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request on its path alone. A miss is a 404; the method is
/// never consulted. Infallible: hyper never sees a service error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    // The body is dropped unread.
    let (parts, _body) = req.into_parts();
    let response = router.handle(&Request::new(parts));
    Ok(response.into_inner())
}

// ── Accept backoff ────────────────────────────────────────────────────────────

/// First delay after a failed `accept`.
const ACCEPT_BACKOFF_MIN: Duration = Duration::from_millis(5);
/// The delay stops doubling here.
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// The delay that follows `current` when another accept fails.
fn next_backoff(current: Duration) -> Duration {
    (current * 2).min(ACCEPT_BACKOFF_MAX)
}

/// Delay between consecutive failed accepts: 5 ms, doubling up to 1 s.
/// A successful accept starts the sequence over.
struct AcceptBackoff {
    delay: Duration,
}

impl AcceptBackoff {
    fn new() -> Self {
        Self { delay: ACCEPT_BACKOFF_MIN }
    }

    /// Records a failure and returns how long to wait before retrying.
    fn fail(&mut self) -> Duration {
        let delay = self.delay;
        self.delay = next_backoff(delay);
        delay
    }

    fn reset(&mut self) {
        self.delay = ACCEPT_BACKOFF_MIN;
    }
}
