//! Test utilities and helper functions for the bookbinder test suite

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Enables log output for a test run; safe to call from every test
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One scripted HTTP response, optionally delayed before sending
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

#[allow(dead_code)]
impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(body: impl Into<String>, delay: Duration) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay,
        }
    }
}

/// Spawns a raw HTTP server that answers consecutive connections with the
/// scripted responses, repeating the last one once the script is exhausted.
///
/// mockito serves the static cases; this helper covers what it cannot:
/// responses that change across attempts (retry tests) and per-request
/// latency (ordering tests). Every response closes its connection so each
/// request maps to exactly one script entry.
#[allow(dead_code)]
pub async fn spawn_server(responses: Vec<CannedResponse>) -> String {
    assert!(!responses.is_empty(), "script needs at least one response");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let mut served = 0usize;
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let response = responses
                .get(served)
                .or_else(|| responses.last())
                .cloned()
                .expect("non-empty script");
            served += 1;

            tokio::spawn(async move {
                // Consume the request head; small GETs arrive in one read.
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                if !response.delay.is_zero() {
                    tokio::time::sleep(response.delay).await;
                }

                let payload = format!(
                    "HTTP/1.1 {} TEST\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = socket.write_all(payload.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/")
}

/// Creates a test HTML document with the specified title and body
#[allow(dead_code)]
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Creates a test HTML document carrying a style block
#[allow(dead_code)]
pub fn styled_page(css: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>styled</title>
    <style>{css}</style>
</head>
<body>
    {body}
</body>
</html>"#
    )
}
