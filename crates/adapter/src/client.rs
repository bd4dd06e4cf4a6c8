//! Async HTTP client for the puzzle endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::core::{Puzzle, PuzzleError};
use crate::payload::NextPuzzle;

pub const DEFAULT_PUZZLE_URL: &str = "https://lichess.org/api/puzzle/next";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to fetch puzzles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PUZZLE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("tess/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Read `TESS_PUZZLE_URL` and `TESS_FETCH_TIMEOUT_SECS`, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FetchConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("TESS_PUZZLE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.url = url;
        }
        if let Some(secs) = lookup("TESS_FETCH_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&s| s > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("puzzle request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("puzzle server answered HTTP {0}")]
    Status(u16),
    #[error("puzzle response is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("failed to start fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Fetches and validates puzzles.
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    client: Client,
    config: FetchConfig,
}

impl PuzzleClient {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch the raw payload.
    pub async fn fetch_payload(&self) -> Result<NextPuzzle, FetchError> {
        tracing::debug!(url = %self.config.url, "fetching puzzle");
        let resp = self
            .client
            .get(&self.config.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "puzzle fetch rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch one puzzle and validate its solution against the start position.
    pub async fn fetch_next(&self) -> Result<Puzzle, FetchError> {
        let puzzle = self.fetch_payload().await?.into_puzzle()?;
        tracing::info!(
            id = %puzzle.id,
            rating = ?puzzle.rating,
            steps = puzzle.solution().len(),
            "puzzle loaded"
        );
        Ok(puzzle)
    }
}
