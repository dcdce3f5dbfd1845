//! The healthz binary: `/api/healthz` on `0.0.0.0:8080`, until killed.
//!
//! Takes no flags, arguments or environment variables. Exits non-zero only
//! if the listener cannot be bound.

use std::io::IsTerminal;
use std::process::ExitCode;

use healthz::Server;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Colour only on a terminal; piped stderr stays plain.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let server = match Server::bind(healthz::ADDR).await {
        Ok(server) => server,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    server.serve(healthz::app()).await;
    ExitCode::SUCCESS
}
