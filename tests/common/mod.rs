//! Shared test utilities: canned JSON bodies and a one-response-per-connection
//! HTTP server for exercising the client without a real backend.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const WHALE_NOTIFICATIONS_JSON: &str = include_str!("../fixtures/whale_notifications.json");
pub const TOKEN_STATS_JSON: &str = include_str!("../fixtures/token_stats.json");

/// Requests captured by [`spawn_server`], one raw request head per connection.
pub type CapturedRequests = Arc<Mutex<Vec<String>>>;

/// Spawns an HTTP server on an ephemeral port that answers every request
/// with the given status and JSON body.
///
/// Returns the base URL to point the client at plus the captured requests.
/// The accept loop lives until the test's runtime shuts down.
pub async fn spawn_server(status: u16, body: String) -> (String, CapturedRequests) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: CapturedRequests = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let captured = Arc::clone(&captured);
            let body = body.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                captured
                    .lock()
                    .await
                    .push(String::from_utf8_lossy(&buf[..n]).to_string());

                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}"), requests)
}
