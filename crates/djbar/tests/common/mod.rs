//! Shared test harness: a scriptable HTTP stub standing in for the player's
//! control endpoint.  Serves one response per request from a fixed list of
//! bodies (the last body repeats), with an optional artificial delay, and
//! records every request path.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use djbar_proto::config::{EndpointConfig, PollConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const PLAYING_BODY: &str =
    r#"{"track":{"id":"spotify:track:t1","name":"Song A","artist":"Artist A"},"volume":40,"state":"playing"}"#;
pub const PAUSED_BODY: &str =
    r#"{"track":{"id":"spotify:track:t1","name":"Song A","artist":"Artist A"},"volume":40,"state":"paused"}"#;

pub struct StubBehavior {
    pub bodies: Vec<String>,
    pub delay: Duration,
}

impl StubBehavior {
    pub fn fixed(body: &str) -> Self {
        Self {
            bodies: vec![body.to_string()],
            delay: Duration::ZERO,
        }
    }

    pub fn fixed_with_delay(body: &str, delay: Duration) -> Self {
        Self {
            bodies: vec![body.to_string()],
            delay,
        }
    }
}

pub struct StubPlayer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl StubPlayer {
    pub async fn start(behavior: StubBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");

        let hits = Arc::new(AtomicUsize::new(0));
        let paths = Arc::new(Mutex::new(Vec::new()));
        let behavior = Arc::new(behavior);

        let accept_hits = hits.clone();
        let accept_paths = paths.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let hits = accept_hits.clone();
                let paths = accept_paths.clone();
                let behavior = behavior.clone();
                tokio::spawn(async move {
                    serve_one(stream, hits, paths, behavior).await;
                });
            }
        });

        Self { addr, hits, paths }
    }

    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig {
            host: "127.0.0.1".to_string(),
            port: self.addr.port(),
        }
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig::default()
    }

    /// Requests received so far (counted at receipt, before any delay).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Command path segments in arrival order.
    pub async fn paths(&self) -> Vec<String> {
        self.paths.lock().await.clone()
    }
}

async fn serve_one(
    mut stream: tokio::net::TcpStream,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
    behavior: Arc<StubBehavior>,
) {
    let mut buf: Vec<u8> = Vec::new();
    let mut tmp = [0u8; 1024];
    loop {
        let Ok(n) = stream.read(&mut tmp).await else {
            return;
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&tmp[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .trim_start_matches('/')
        .to_string();

    let idx = hits.fetch_add(1, Ordering::SeqCst);
    paths.lock().await.push(path);

    if !behavior.delay.is_zero() {
        tokio::time::sleep(behavior.delay).await;
    }

    let body = behavior
        .bodies
        .get(idx.min(behavior.bodies.len().saturating_sub(1)))
        .cloned()
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
