//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Start a mock upstream that records every raw request head it receives
/// and answers with a fixed status, headers, and body.
///
/// The returned receiver yields one request head (request line + headers)
/// per accepted request.
pub async fn start_capturing_upstream(
    addr: SocketAddr,
    status: u16,
    extra_headers: &'static [(&'static str, &'static str)],
    body: &'static str,
) -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let head = read_request_head(&mut socket).await;
                        let _ = tx.send(head);

                        let mut response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                            status_line(status),
                            body.len()
                        );
                        for (name, value) in extra_headers {
                            response.push_str(&format!("{name}: {value}\r\n"));
                        }
                        response.push_str("\r\n");
                        response.push_str(body);

                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    rx
}

/// Start a mock upstream that accepts connections and immediately drops
/// them, producing a transport error on every attempt. Returns the accept
/// counter.
pub async fn start_resetting_upstream(addr: SocketAddr) -> Arc<AtomicU32> {
    let counter = Arc::new(AtomicU32::new(0));
    let accepts = counter.clone();
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    accepts.fetch_add(1, Ordering::SeqCst);
                    drop(socket);
                }
                Err(_) => break,
            }
        }
    });

    counter
}

/// Start a mock upstream that accepts and then never responds, to exercise
/// the forward deadline.
pub async fn start_silent_upstream(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let _ = read_request_head(&mut socket).await;
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        drop(socket);
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read from the socket until the end of the request head.
async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        201 => "201 Created",
        404 => "404 Not Found",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}
