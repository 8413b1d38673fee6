//! Exploding d10 dice pool roller for Nachtprobe.
//!
//! Simulates the "stats + skills + bonuses" check: roll that many d10s,
//! count every 8+ as a success, and re-roll every 10 (an explosion) until
//! no more 10s come up. The success total classifies the check as a
//! failure, success, or exceptional success.

pub mod error;
pub mod outcome;
pub mod pool;
pub mod roll;

pub use error::{DiceError, DiceResult};
pub use outcome::RollOutcome;
pub use pool::{AXIS_MAX, DicePoolConfig};
pub use roll::{EXPLODE_VALUE, RollResult, SUCCESS_THRESHOLD, roll_pool};
