//! Minimal HTTP server standing in for the Routes API.

#![allow(dead_code, reason = "each test binary uses a subset of these helpers")]

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A request as seen by the stub server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    /// Header names are lower-cased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

/// Canned answer served to the first connection.
#[derive(Debug, Clone, Copy)]
pub enum StubReply {
    Respond { status: u16, body: &'static str },
    /// Read the request and never answer.
    Hang,
}

/// Serve one connection, returning the base URL and the captured request.
pub async fn serve_once(reply: StubReply) -> (String, JoinHandle<CapturedRequest>) {
    let (listener, base_url) = bind().await;
    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept connection");
        answer(stream, reply).await
    });
    (base_url, handle)
}

/// Serve `connections` connections one after another with the same reply.
pub async fn serve_many(
    reply: StubReply,
    connections: usize,
) -> (String, JoinHandle<Vec<CapturedRequest>>) {
    let (listener, base_url) = bind().await;
    let handle = tokio::spawn(async move {
        let mut captured = Vec::with_capacity(connections);
        for _ in 0..connections {
            let (stream, _) = listener.accept().await.expect("accept connection");
            captured.push(answer(stream, reply).await);
        }
        captured
    });
    (base_url, handle)
}

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    (listener, format!("http://{addr}"))
}

async fn answer(mut stream: TcpStream, reply: StubReply) -> CapturedRequest {
    let captured = read_request(&mut stream).await;
    match reply {
        StubReply::Respond { status, body } => {
            let response = format!(
                "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                reason_phrase(status),
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = stream.shutdown().await;
        }
        StubReply::Hang => tokio::time::sleep(Duration::from_secs(30)).await,
    }
    captured
}

/// An address nothing is listening on.
pub async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr: SocketAddr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    let header_end = loop {
        let read = stream.read(&mut chunk).await.expect("read request");
        assert!(read > 0, "client closed the connection early");
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_owned();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_owned()))
        .collect();
    let length = headers
        .iter()
        .find(|(name, _)| name == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + length {
        let read = stream.read(&mut chunk).await.expect("read request body");
        assert!(read > 0, "client closed the connection mid-body");
        buffer.extend_from_slice(&chunk[..read]);
    }
    let body = String::from_utf8_lossy(&buffer[header_end..header_end + length]).into_owned();

    CapturedRequest {
        request_line,
        headers,
        body,
    }
}
