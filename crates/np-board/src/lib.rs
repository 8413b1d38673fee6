//! Reveal-board minigame engine for Nachtprobe.
//!
//! A session runs exactly three rounds. Each round the player declares how
//! many prior successes they bring in (0-3), which buys bad tokens out of
//! the harder tiers, then reveals face-down tokens one at a time until a
//! `Good` or `Bad` comes up. Two good rounds out of three win the session.
//!
//! The engine is a synchronous state machine over plain values: every
//! operation consumes the current state and either mutates it or reports a
//! harmless no-op. Rendering, input handling, and any "peek" affordances
//! belong to the caller.

pub mod board;
pub mod error;
pub mod pool;
pub mod token;

pub use board::{BoardState, Phase, ROUNDS, RoundResult, Verdict};
pub use error::{BoardError, BoardResult};
pub use pool::{MAX_PENDING_SUCCESSES, generate};
pub use token::{Tier, Token, TokenId, TokenOutcome};
