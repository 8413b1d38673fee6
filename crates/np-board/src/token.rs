//! Board tokens and their outcomes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a token, unique within and across generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(Uuid);

impl TokenId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The semantic result a token represents once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenOutcome {
    /// The round is won on this reveal.
    Good,
    /// The round is lost on this reveal.
    Bad,
    /// Nothing resolves; the player keeps revealing.
    Retry,
}

impl std::fmt::Display for TokenOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Bad => write!(f, "bad"),
            Self::Retry => write!(f, "retry"),
        }
    }
}

/// Which source pool a token came from. Display/grouping only; tiers have
/// no effect on how a reveal resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// The always-present base pool.
    Basic,
    /// The mid pool; prior successes remove its bad tokens first.
    Advanced,
    /// The top pool; only a third prior success reaches it.
    Hard,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Advanced => write!(f, "advanced"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A single face-down unit of board content.
///
/// Outcome and tier are fixed at creation; only `revealed` ever changes,
/// and only from false to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    outcome: TokenOutcome,
    tier: Tier,
    revealed: bool,
}

impl Token {
    /// Create a fresh, unrevealed token with a new unique id.
    pub fn new(outcome: TokenOutcome, tier: Tier) -> Self {
        Self {
            id: TokenId::fresh(),
            outcome,
            tier,
            revealed: false,
        }
    }

    /// This token's identifier.
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// The result this token resolves to when revealed.
    pub fn outcome(&self) -> TokenOutcome {
        self.outcome
    }

    /// The source pool this token came from.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Whether this token has been revealed.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_unrevealed() {
        let token = Token::new(TokenOutcome::Good, Tier::Basic);
        assert!(!token.revealed());
        assert_eq!(token.outcome(), TokenOutcome::Good);
        assert_eq!(token.tier(), Tier::Basic);
    }

    #[test]
    fn ids_are_unique() {
        let a = Token::new(TokenOutcome::Retry, Tier::Basic);
        let b = Token::new(TokenOutcome::Retry, Tier::Basic);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn reveal_is_one_way() {
        let mut token = Token::new(TokenOutcome::Bad, Tier::Hard);
        token.reveal();
        assert!(token.revealed());
        token.reveal();
        assert!(token.revealed());
    }

    #[test]
    fn displays() {
        assert_eq!(TokenOutcome::Good.to_string(), "good");
        assert_eq!(TokenOutcome::Retry.to_string(), "retry");
        assert_eq!(Tier::Advanced.to_string(), "advanced");
    }

    #[test]
    fn round_trip_serde() {
        let token = Token::new(TokenOutcome::Bad, Tier::Advanced);
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), token.id());
        assert_eq!(back.outcome(), token.outcome());
        assert_eq!(back.tier(), token.tier());
        assert!(!back.revealed());
    }
}
