use std::fmt;

use crate::core::GameStatus;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Free play reached a terminal position.
    GameOver(GameStatus),
    /// Every scripted ply was played.
    Solved,
    /// The user typed something other than the scripted move.
    Failed { expected: String, got: String },
    /// The viewport could not hold the board.
    DoesNotFit,
    /// The user pressed Esc or Ctrl-C while typing.
    Aborted,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionOutcome::GameOver(status) => write!(f, "game over: {status}"),
            SessionOutcome::Solved => f.write_str("puzzle solved"),
            SessionOutcome::Failed { expected, got } => {
                write!(f, "puzzle failed: expected {expected}, got {got}")
            }
            SessionOutcome::DoesNotFit => f.write_str("window too small"),
            SessionOutcome::Aborted => f.write_str("aborted"),
        }
    }
}
