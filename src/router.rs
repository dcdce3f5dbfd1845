//! Static path table.
//!
//! One radix tree for all methods: a route answers every method on its path.
//! Lookup is an exact match on the raw URI path; there is no trailing-slash
//! redirect, no case folding and no percent-decoding.

use matchit::Router as MatchitRouter;

use crate::request::Request;
use crate::response::Response;

/// A route handler. Plain function pointers: handlers hold no state and do
/// no I/O, so there is nothing to box or await.
pub type Handler = fn(&Request) -> Response;

/// The application router. Build it once at startup and pass it to
/// [`Server::serve`](crate::Server::serve).
pub struct Router {
    routes: MatchitRouter<Handler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new() }
    }

    /// Register `handler` for every method on `path`. Returns `self` for
    /// chaining.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered.
    pub fn route(mut self, path: &str, handler: Handler) -> Self {
        self.routes
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Runs the handler registered for the request's path, or returns the
    /// not-found response.
    pub(crate) fn handle(&self, req: &Request) -> Response {
        match self.routes.at(req.path()) {
            Ok(matched) => (matched.value)(req),
            Err(_) => Response::not_found(),
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
