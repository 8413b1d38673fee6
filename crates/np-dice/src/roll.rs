//! Exploding pool rolling and roll results.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::outcome::RollOutcome;
use crate::pool::DicePoolConfig;

/// A draw at or above this value counts as one success.
pub const SUCCESS_THRESHOLD: u32 = 8;

/// A draw of this value grants one additional die, recursively.
pub const EXPLODE_VALUE: u32 = 10;

/// The result of rolling an exploding dice pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Every value drawn, in draw order. Explosion dice appear after all
    /// dice of the depth that triggered them.
    pub rolls: Vec<u32>,
    /// Number of draws at or above [`SUCCESS_THRESHOLD`].
    pub total_successes: u32,
}

impl RollResult {
    /// Classify this roll's success total.
    pub fn outcome(&self) -> RollOutcome {
        RollOutcome::from_successes(self.total_successes)
    }

    /// Number of explosions (draws of [`EXPLODE_VALUE`]) across all depths.
    pub fn explosions(&self) -> u32 {
        self.rolls.iter().filter(|&&v| v == EXPLODE_VALUE).count() as u32
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        write!(
            f,
            "[{}] = {} successes ({})",
            values.join(", "),
            self.total_successes,
            self.outcome()
        )
    }
}

/// Roll an exploding d10 pool using the given RNG.
///
/// Rolls `config.total()` dice, then one extra die per 10 drawn, repeating
/// until a depth produces no 10s. The explosion cascade is driven by an
/// explicit per-depth count rather than recursion, so the call stack stays
/// flat no matter how long a lucky streak runs.
///
/// # Errors
///
/// Returns [`DiceError::EmptyPool`] if the configuration has zero dice.
pub fn roll_pool(config: &DicePoolConfig, rng: &mut StdRng) -> DiceResult<RollResult> {
    if config.is_empty() {
        return Err(DiceError::EmptyPool);
    }

    let mut rolls = Vec::with_capacity(config.total() as usize);
    let mut total_successes = 0;
    let mut pending = config.total();

    while pending > 0 {
        let mut explosions = 0;
        for _ in 0..pending {
            let value = rng.random_range(1..=10);
            if value >= SUCCESS_THRESHOLD {
                total_successes += 1;
            }
            if value == EXPLODE_VALUE {
                explosions += 1;
            }
            rolls.push(value);
        }
        pending = explosions;
    }

    Ok(RollResult {
        rolls,
        total_successes,
    })
}
