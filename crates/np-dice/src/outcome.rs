//! Classification of a roll's success total.

use serde::{Deserialize, Serialize};

/// How a check turned out, based on its total number of successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// No successes at all.
    Failure,
    /// One to four successes.
    Success,
    /// Five or more successes.
    ExceptionalSuccess,
}

impl RollOutcome {
    /// Classify a success total.
    pub fn from_successes(total: u32) -> Self {
        match total {
            0 => Self::Failure,
            1..=4 => Self::Success,
            _ => Self::ExceptionalSuccess,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure => write!(f, "Failure"),
            Self::Success => write!(f, "Success"),
            Self::ExceptionalSuccess => write!(f, "Exceptional Success"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(RollOutcome::from_successes(0), RollOutcome::Failure);
        assert_eq!(RollOutcome::from_successes(1), RollOutcome::Success);
        assert_eq!(RollOutcome::from_successes(4), RollOutcome::Success);
        assert_eq!(
            RollOutcome::from_successes(5),
            RollOutcome::ExceptionalSuccess
        );
        assert_eq!(
            RollOutcome::from_successes(17),
            RollOutcome::ExceptionalSuccess
        );
    }

    #[test]
    fn display() {
        assert_eq!(RollOutcome::Failure.to_string(), "Failure");
        assert_eq!(RollOutcome::Success.to_string(), "Success");
        assert_eq!(
            RollOutcome::ExceptionalSuccess.to_string(),
            "Exceptional Success"
        );
    }
}
