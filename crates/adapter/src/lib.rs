//! Adapter module - puzzle fetching over HTTP with a JSON payload
//!
//! Puzzle mode needs a position and a solution line from somewhere outside the
//! process. This crate fetches them from a Lichess-compatible endpoint,
//! decodes the JSON body, replays the source game and validates the solution
//! before anything reaches the interaction loop.
//!
//! # Payload
//!
//! ```text
//! {"game":{"id":"...","pgn":"e4 e5 ..."},
//!  "puzzle":{"id":"...","rating":1500,"solution":["h5f7"],"initialPly":5}}
//! ```
//!
//! The start position is the game replayed through `initialPly + 1` plies.
//!
//! # Environment Variables
//!
//! - `TESS_PUZZLE_URL`: endpoint (default: `https://lichess.org/api/puzzle/next`)
//! - `TESS_FETCH_TIMEOUT_SECS`: request timeout in seconds (default: 30)
//!
//! # Implementation
//!
//! - [`client`]: async `reqwest` client and [`FetchError`]
//! - [`runtime`]: a blocking wrapper owning a small tokio runtime
//! - [`payload`]: serde types for the response body

pub mod client;
pub mod payload;
pub mod runtime;

pub use tess_core as core;

pub use client::{FetchConfig, FetchError, PuzzleClient, DEFAULT_PUZZLE_URL};
pub use payload::{NextPuzzle, PuzzleGame, PuzzleInfo};
pub use runtime::PuzzleFetcher;
