use djbar_proto::config::{EndpointConfig, PollConfig};
use djbar_proto::player::{Command, PlayerState};
use thiserror::Error;

/// Everything that can go wrong on one fetch.  Both variants are swallowed
/// at the engine boundary; the distinction only matters for logging and
/// tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the player's control endpoint.  One request per command,
/// no retries; the timeouts bound how long a single fetch can hold the
/// engine's busy gate.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &EndpointConfig, poll: &PollConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("djbar/0.1")
            .connect_timeout(poll.connect_timeout())
            .timeout(poll.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: endpoint.base_url(),
        })
    }

    pub async fn fetch(&self, command: Command) -> Result<PlayerState, FetchError> {
        let url = format!("{}/{}", self.base_url, command.path());
        let resp = self.client.get(&url).send().await?.error_for_status()?;

        // Decode from the raw body so a non-JSON response classifies as
        // Decode, not Network.
        let body = resp.text().await?;
        let state: PlayerState = serde_json::from_str(&body)?;
        Ok(state)
    }
}
