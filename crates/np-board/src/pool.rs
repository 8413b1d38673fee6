//! Token pool generation.
//!
//! Each round's board is built from three fixed source pools. Prior
//! successes declared by the player buy bad tokens out of the advanced
//! pool first, then the hard pool, before the combined pool is shuffled.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::token::{Tier, Token, TokenOutcome};

/// Maximum number of prior successes a player can declare.
pub const MAX_PENDING_SUCCESSES: u32 = 3;

use TokenOutcome::{Bad, Good, Retry};

const BASIC: [TokenOutcome; 4] = [Good, Bad, Retry, Retry];
const ADVANCED: [TokenOutcome; 4] = [Good, Good, Bad, Bad];
const HARD: [TokenOutcome; 2] = [Good, Bad];

/// Build a shuffled token pool for one round.
///
/// Removes the first `min(p, 2)` bad tokens from the advanced pool and the
/// first `max(0, p - 2)` from the hard pool, scanning each pool in its
/// fixed order; the basic pool is never altered. The surviving tokens are
/// concatenated, given fresh ids, and shuffled with a uniform Fisher-Yates
/// permutation. Pool size is 10 with no prior successes, down to 8 with
/// three.
///
/// `pending_successes` above [`MAX_PENDING_SUCCESSES`] is clamped; callers
/// validate their own input before it gets here.
pub fn generate(pending_successes: u32, rng: &mut StdRng) -> Vec<Token> {
    let pending = pending_successes.min(MAX_PENDING_SUCCESSES) as usize;
    let remove_advanced = pending.min(2);
    let remove_hard = pending.saturating_sub(2);

    let mut tokens: Vec<Token> = Vec::with_capacity(BASIC.len() + ADVANCED.len() + HARD.len());
    tokens.extend(BASIC.iter().map(|&o| Token::new(o, Tier::Basic)));
    tokens.extend(strip_bad(&ADVANCED, remove_advanced).map(|o| Token::new(o, Tier::Advanced)));
    tokens.extend(strip_bad(&HARD, remove_hard).map(|o| Token::new(o, Tier::Hard)));

    tokens.shuffle(rng);
    tokens
}

/// Yield a pool's outcomes in order, skipping the first `count` bad ones.
fn strip_bad(
    pool: &'static [TokenOutcome],
    mut count: usize,
) -> impl Iterator<Item = TokenOutcome> {
    pool.iter().copied().filter(move |&outcome| {
        if outcome == Bad && count > 0 {
            count -= 1;
            false
        } else {
            true
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(pending: u32, seed: u64) -> Vec<Token> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(pending, &mut rng)
    }

    fn count(tokens: &[Token], tier: Tier, outcome: TokenOutcome) -> usize {
        tokens
            .iter()
            .filter(|t| t.tier() == tier && t.outcome() == outcome)
            .count()
    }

    #[test]
    fn sizes_per_pending() {
        assert_eq!(pool(0, 1).len(), 10);
        assert_eq!(pool(1, 1).len(), 9);
        assert_eq!(pool(2, 1).len(), 8);
        assert_eq!(pool(3, 1).len(), 8);
    }

    #[test]
    fn basic_pool_never_altered() {
        for pending in 0..=3 {
            let tokens = pool(pending, 5);
            assert_eq!(count(&tokens, Tier::Basic, TokenOutcome::Good), 1);
            assert_eq!(count(&tokens, Tier::Basic, TokenOutcome::Bad), 1);
            assert_eq!(count(&tokens, Tier::Basic, TokenOutcome::Retry), 2);
        }
    }

    #[test]
    fn removal_hits_advanced_before_hard() {
        let tokens = pool(1, 2);
        assert_eq!(count(&tokens, Tier::Advanced, TokenOutcome::Bad), 1);
        assert_eq!(count(&tokens, Tier::Hard, TokenOutcome::Bad), 1);

        let tokens = pool(2, 2);
        assert_eq!(count(&tokens, Tier::Advanced, TokenOutcome::Bad), 0);
        assert_eq!(count(&tokens, Tier::Hard, TokenOutcome::Bad), 1);
    }

    #[test]
    fn three_pending_leaves_only_basic_bad() {
        let tokens = pool(3, 9);
        assert_eq!(tokens.len(), 8);
        assert_eq!(count(&tokens, Tier::Advanced, TokenOutcome::Bad), 0);
        assert_eq!(count(&tokens, Tier::Hard, TokenOutcome::Bad), 0);
        let bads: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.outcome() == TokenOutcome::Bad)
            .collect();
        assert_eq!(bads.len(), 1);
        assert_eq!(bads[0].tier(), Tier::Basic);
    }

    #[test]
    fn good_tokens_never_removed() {
        for pending in 0..=3 {
            let tokens = pool(pending, 3);
            assert_eq!(count(&tokens, Tier::Advanced, TokenOutcome::Good), 2);
            assert_eq!(count(&tokens, Tier::Hard, TokenOutcome::Good), 1);
        }
    }

    #[test]
    fn ids_pairwise_unique_across_generations() {
        let mut rng = StdRng::seed_from_u64(4);
        let first = generate(0, &mut rng);
        let second = generate(0, &mut rng);
        let ids: HashSet<_> = first.iter().chain(second.iter()).map(Token::id).collect();
        assert_eq!(ids.len(), first.len() + second.len());
    }

    #[test]
    fn all_tokens_start_unrevealed() {
        assert!(pool(0, 6).iter().all(|t| !t.revealed()));
    }

    #[test]
    fn shuffle_deterministic_with_seed() {
        let a: Vec<TokenOutcome> = pool(0, 11).iter().map(Token::outcome).collect();
        let b: Vec<TokenOutcome> = pool(0, 11).iter().map(Token::outcome).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_pending_clamped() {
        assert_eq!(pool(4, 8).len(), 8);
        assert_eq!(pool(u32::MAX, 8).len(), 8);
    }

    proptest! {
        #[test]
        fn composition_matches_formula(pending in 0u32..=3, seed in any::<u64>()) {
            let tokens = pool(pending, seed);
            let p = pending as usize;
            prop_assert_eq!(tokens.len(), 10 - p.min(2) - p.saturating_sub(2));

            let goods = tokens.iter().filter(|t| t.outcome() == TokenOutcome::Good).count();
            let retries = tokens.iter().filter(|t| t.outcome() == TokenOutcome::Retry).count();
            prop_assert_eq!(goods, 4);
            prop_assert_eq!(retries, 2);

            let ids: HashSet<_> = tokens.iter().map(Token::id).collect();
            prop_assert_eq!(ids.len(), tokens.len());
        }
    }
}
