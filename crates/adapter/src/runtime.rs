//! Adapter runtime integration.
//!
//! Bridges the synchronous session loop with the async puzzle client. The
//! runtime lives only as long as the fetcher; the session keeps no async state.

use tokio::runtime::{Builder, Runtime};

use crate::client::{FetchConfig, FetchError, PuzzleClient};
use crate::core::Puzzle;

/// Blocking puzzle fetcher.
pub struct PuzzleFetcher {
    rt: Runtime,
    client: PuzzleClient,
}

impl PuzzleFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;
        let client = PuzzleClient::new(config)?;
        Ok(Self { rt, client })
    }

    /// Fetch one validated puzzle, blocking the caller.
    ///
    /// Must not be called from inside another tokio runtime.
    pub fn fetch_next(&self) -> Result<Puzzle, FetchError> {
        self.rt.block_on(self.client.fetch_next())
    }
}
