//! Error types for the dice roller.

use crate::pool::AXIS_MAX;

/// Errors that can occur when configuring or rolling a dice pool.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// An axis rating is outside the allowed range.
    #[error("{axis} rating {value} exceeds the maximum of {AXIS_MAX}")]
    AxisOutOfRange {
        /// Which axis was out of range ("stats", "skills", or "bonuses").
        axis: &'static str,
        /// The rejected value.
        value: u32,
    },

    /// The configured pool has zero dice in it.
    #[error("cannot roll an empty dice pool")]
    EmptyPool,
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
