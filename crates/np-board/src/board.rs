//! The board state machine.
//!
//! Phases move `input -> playing -> summary -> {input | end}`. A round
//! resolves on the first non-retry reveal; after three resolved rounds the
//! session ends and the verdict is computed from the history.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::pool::{MAX_PENDING_SUCCESSES, generate};
use crate::token::{Token, TokenId, TokenOutcome};

/// Number of rounds in a session.
pub const ROUNDS: usize = 3;

/// Where the session currently is in a round's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to declare prior successes and start.
    Input,
    /// Tokens are on the board and can be revealed.
    Playing,
    /// The round has resolved; the board is frozen for inspection.
    Summary,
    /// All three rounds are resolved.
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Playing => write!(f, "playing"),
            Self::Summary => write!(f, "summary"),
            Self::End => write!(f, "end"),
        }
    }
}

/// How a resolved round went. `Retry` reveals never resolve a round, so
/// this is narrower than [`TokenOutcome`] on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The round was won.
    Good,
    /// The round was lost.
    Bad,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// The session's final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// At least two of three rounds were good.
    Victory,
    /// Fewer than two rounds were good.
    Defeat,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Victory => write!(f, "Victory"),
            Self::Defeat => write!(f, "Defeat"),
        }
    }
}

/// One reveal-board session.
///
/// All mutation goes through the operation methods; the struct is `Clone`
/// so a caller that wants snapshot history can keep copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardState {
    round: usize,
    pending_successes: u32,
    tokens: Vec<Token>,
    history: [Option<RoundResult>; ROUNDS],
    phase: Phase,
}

impl BoardState {
    /// Create a fresh session: round 0, empty history, input phase.
    pub fn new() -> Self {
        Self {
            round: 0,
            pending_successes: 0,
            tokens: Vec::new(),
            history: [None; ROUNDS],
            phase: Phase::Input,
        }
    }

    /// Current round index (0-2).
    pub fn round(&self) -> usize {
        self.round
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Prior successes declared for the next pool generation.
    pub fn pending_successes(&self) -> u32 {
        self.pending_successes
    }

    /// The current round's tokens, in board order. Empty outside
    /// playing/summary.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Per-round results; `None` marks a round not yet resolved.
    pub fn history(&self) -> &[Option<RoundResult>; ROUNDS] {
        &self.history
    }

    /// Number of rounds resolved good so far.
    pub fn good_rounds(&self) -> usize {
        self.history
            .iter()
            .filter(|r| matches!(r, Some(RoundResult::Good)))
            .count()
    }

    /// The final verdict, available only once the session has ended.
    pub fn verdict(&self) -> Option<Verdict> {
        if self.phase != Phase::End {
            return None;
        }
        if self.good_rounds() >= 2 {
            Some(Verdict::Victory)
        } else {
            Some(Verdict::Defeat)
        }
    }

    /// Declare prior successes for the next round.
    ///
    /// # Errors
    ///
    /// [`BoardError::WrongPhase`] outside the input phase,
    /// [`BoardError::PendingOutOfRange`] for values above
    /// [`MAX_PENDING_SUCCESSES`].
    pub fn set_pending_successes(&mut self, pending: u32) -> BoardResult<()> {
        if self.phase != Phase::Input {
            return Err(BoardError::WrongPhase {
                action: "declare successes",
                phase: self.phase,
            });
        }
        if pending > MAX_PENDING_SUCCESSES {
            return Err(BoardError::PendingOutOfRange(pending));
        }
        self.pending_successes = pending;
        Ok(())
    }

    /// Generate this round's token pool and start playing.
    ///
    /// Round index and history are untouched; they only move on
    /// [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// [`BoardError::WrongPhase`] outside the input phase.
    pub fn start_round(&mut self, rng: &mut StdRng) -> BoardResult<()> {
        if self.phase != Phase::Input {
            return Err(BoardError::WrongPhase {
                action: "start a round",
                phase: self.phase,
            });
        }
        self.tokens = generate(self.pending_successes, rng);
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Reveal a token by id.
    ///
    /// Returns the revealed outcome, or `None` for the harmless no-op
    /// cases: unknown id, already-revealed token, or any phase other than
    /// playing. A `Good` or `Bad` reveal resolves the round into
    /// `history[round]` and freezes the board in the summary phase; a
    /// `Retry` reveal changes nothing but the token.
    pub fn reveal(&mut self, id: TokenId) -> Option<TokenOutcome> {
        if self.phase != Phase::Playing {
            return None;
        }
        let token = self
            .tokens
            .iter_mut()
            .find(|t| t.id() == id && !t.revealed())?;
        token.reveal();

        let outcome = token.outcome();
        match outcome {
            TokenOutcome::Retry => {}
            TokenOutcome::Good => {
                self.history[self.round] = Some(RoundResult::Good);
                self.phase = Phase::Summary;
            }
            TokenOutcome::Bad => {
                self.history[self.round] = Some(RoundResult::Bad);
                self.phase = Phase::Summary;
            }
        }
        Some(outcome)
    }

    /// Leave the summary phase, discarding the board.
    ///
    /// After the last round the session ends; otherwise the next round's
    /// input phase begins with pending successes reset to zero. Unrevealed
    /// tokens are discarded, never retroactively shown.
    ///
    /// # Errors
    ///
    /// [`BoardError::WrongPhase`] outside the summary phase.
    pub fn advance(&mut self) -> BoardResult<()> {
        if self.phase != Phase::Summary {
            return Err(BoardError::WrongPhase {
                action: "advance",
                phase: self.phase,
            });
        }
        self.tokens.clear();
        if self.round == ROUNDS - 1 {
            self.phase = Phase::End;
        } else {
            self.round += 1;
            self.pending_successes = 0;
            self.phase = Phase::Input;
        }
        Ok(())
    }

    /// Return to the initial snapshot, valid in any phase.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
