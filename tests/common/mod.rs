//! Raw HTTP/1.1 client for driving a live server.

#![allow(dead_code)]

use std::net::SocketAddr;

use healthz::Server;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Binds the app on an ephemeral loopback port and serves it in the
/// background.
pub async fn spawn_app() -> SocketAddr {
    let server = Server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind ephemeral port");
    let addr = server.local_addr().expect("local addr");
    tokio::spawn(server.serve(healthz::app()));
    addr
}

#[derive(Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// One client connection. Requests are sent sequentially on it, so it
/// exercises keep-alive.
pub struct Conn {
    reader: BufReader<TcpStream>,
}

impl Conn {
    pub async fn open(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.expect("connect");
        Self { reader: BufReader::new(stream) }
    }

    pub async fn request(&mut self, method: &str, target: &str) -> RawResponse {
        self.request_with_body(method, target, b"").await
    }

    pub async fn request_with_body(&mut self, method: &str, target: &str, body: &[u8]) -> RawResponse {
        let head = format!(
            "{method} {target} HTTP/1.1\r\nhost: localhost\r\ncontent-length: {}\r\n\r\n",
            body.len()
        );
        let stream = self.reader.get_mut();
        stream.write_all(head.as_bytes()).await.expect("write head");
        stream.write_all(body).await.expect("write body");
        stream.flush().await.expect("flush");

        self.read_response(method == "HEAD").await
    }

    /// Reads one response. Only `content-length` framing is understood; a
    /// chunked response would block here. Every response this server
    /// writes has a `Full` body, which hyper always frames by length.
    async fn read_response(&mut self, head_only: bool) -> RawResponse {
        let mut line = String::new();
        self.reader.read_line(&mut line).await.expect("status line");
        let status = line
            .split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("bad status line: {line:?}"));

        let mut headers = Vec::new();
        loop {
            line.clear();
            self.reader.read_line(&mut line).await.expect("header line");
            let trimmed = line.trim_end_matches(['\r', '\n']);
            if trimmed.is_empty() {
                break;
            }
            let (name, value) = trimmed.split_once(':').expect("header separator");
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_owned()));
        }

        let len = if head_only {
            0
        } else {
            headers
                .iter()
                .find(|(k, _)| k == "content-length")
                .map(|(_, v)| v.parse::<usize>().expect("content-length"))
                .unwrap_or(0)
        };
        let mut body = vec![0; len];
        self.reader.read_exact(&mut body).await.expect("body");

        RawResponse { status, headers, body }
    }
}

/// Sends one request on a fresh connection.
pub async fn send(addr: SocketAddr, method: &str, target: &str) -> RawResponse {
    Conn::open(addr).await.request(method, target).await
}
