//! Dice pool configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// Maximum rating for each pool axis.
pub const AXIS_MAX: u32 = 5;

/// The three independent axes that make up a check's dice pool.
///
/// Each axis is rated 0 to [`AXIS_MAX`]; their sum is the number of d10s
/// in the initial roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePoolConfig {
    /// Raw capability rating.
    pub stats: u32,
    /// Trained proficiency rating.
    pub skills: u32,
    /// Situational bonus dice.
    pub bonuses: u32,
}

impl DicePoolConfig {
    /// Create a pool configuration, validating each axis against [`AXIS_MAX`].
    pub fn new(stats: u32, skills: u32, bonuses: u32) -> DiceResult<Self> {
        for (axis, value) in [("stats", stats), ("skills", skills), ("bonuses", bonuses)] {
            if value > AXIS_MAX {
                return Err(DiceError::AxisOutOfRange { axis, value });
            }
        }
        Ok(Self {
            stats,
            skills,
            bonuses,
        })
    }

    /// Total number of dice in the initial roll.
    pub fn total(&self) -> u32 {
        self.stats + self.skills + self.bonuses
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for DicePoolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d10 (stats {} + skills {} + bonuses {})",
            self.total(),
            self.stats,
            self.skills,
            self.bonuses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let cfg = DicePoolConfig::new(3, 2, 1).unwrap();
        assert_eq!(cfg.total(), 6);
        assert!(!cfg.is_empty());
    }

    #[test]
    fn zero_pool_is_empty() {
        let cfg = DicePoolConfig::new(0, 0, 0).unwrap();
        assert_eq!(cfg.total(), 0);
        assert!(cfg.is_empty());
    }

    #[test]
    fn max_ratings_accepted() {
        let cfg = DicePoolConfig::new(5, 5, 5).unwrap();
        assert_eq!(cfg.total(), 15);
    }

    #[test]
    fn out_of_range_axis_rejected() {
        let err = DicePoolConfig::new(6, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            DiceError::AxisOutOfRange {
                axis: "stats",
                value: 6
            }
        ));

        assert!(DicePoolConfig::new(0, 9, 0).is_err());
        assert!(DicePoolConfig::new(0, 0, 100).is_err());
    }

    #[test]
    fn display() {
        let cfg = DicePoolConfig::new(2, 1, 0).unwrap();
        assert_eq!(cfg.to_string(), "3d10 (stats 2 + skills 1 + bonuses 0)");
    }

    #[test]
    fn round_trip_serde() {
        let cfg = DicePoolConfig::new(1, 2, 3).unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: DicePoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
