//! Unified error type.

use std::fmt;
use std::io;
use std::net::SocketAddr;

/// The error type returned by healthz's fallible operations.
///
/// The only thing that can fail is binding the listener. A 404 is a
/// [`Response`](crate::Response), and connection-level failures end that
/// connection without ever surfacing here.
#[derive(Debug)]
pub struct Error {
    addr: SocketAddr,
    source: io::Error,
}

impl Error {
    pub(crate) fn bind(addr: SocketAddr, source: io::Error) -> Self {
        Self { addr, source }
    }

    /// The address that could not be bound.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The underlying I/O error kind, e.g. [`io::ErrorKind::AddrInUse`].
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to bind {}: {}", self.addr, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
