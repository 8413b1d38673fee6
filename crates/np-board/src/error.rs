//! Error types for the board engine.

use crate::board::Phase;
use crate::pool::MAX_PENDING_SUCCESSES;

/// Errors that can occur during board operations.
///
/// No-op conditions (revealing an unknown or already-revealed token,
/// revealing outside the playing phase) are deliberately not errors; they
/// leave the state unchanged and are reported through return values.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A declared prior-success count is outside the allowed range.
    #[error("pending successes {0} exceeds the maximum of {MAX_PENDING_SUCCESSES}")]
    PendingOutOfRange(u32),

    /// An operation was invoked in a phase that does not permit it.
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase {
        /// What was attempted.
        action: &'static str,
        /// The phase the board was in.
        phase: Phase,
    },
}

/// Convenience result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
