//! Interaction loops and the session driver.
//!
//! A session is prepared once (fresh board, loaded record, or fetched puzzle)
//! and then handed to exactly one loop. Loops talk to the user only through a
//! [`Console`]: [`TerminalConsole`] for a real terminal, [`ScriptedConsole`]
//! for headless runs and tests.

pub mod config;
pub mod console;
pub mod free_play;
pub mod outcome;
pub mod puzzle;
pub mod screen;
pub mod session;

pub use tess_adapter as adapter;
pub use tess_core as core;
pub use tess_input as input;
pub use tess_term as term;
pub use tess_types as types;

pub use config::Config;
pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use free_play::{apply_text, FreePlay, FreePlayState, Verdict};
pub use outcome::SessionOutcome;
pub use puzzle::{PuzzleLoop, PuzzleState};
pub use screen::Screen;
pub use session::{Session, SessionError, SessionMode, UsageError, USAGE};
