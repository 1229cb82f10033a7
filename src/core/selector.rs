use rand::Rng;
use std::sync::Arc;

use crate::models::ScoredCandidate;

/// How many top-scoring candidates the random draw chooses among.
///
/// Drawing from the top few instead of always taking the single best
/// avoids every requester with similar interests converging on the same
/// profile.
pub const TOP_POOL_SIZE: usize = 3;

/// Source of randomness for the top-K draw. Injectable so tests can pin
/// the outcome.
pub trait RandomSource: Send + Sync {
    /// Pick an index in `[0, n)`. Callers guarantee `n >= 1`.
    fn pick_index(&self, n: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Fixed source for deterministic tests; always returns the configured
/// index, clamped to the pool.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub usize);

impl RandomSource for FixedSource {
    fn pick_index(&self, n: usize) -> usize {
        self.0.min(n - 1)
    }
}

/// Picks one candidate from the scored list: stable sort descending by
/// score, then a uniform random draw over the top `min(pool_size, n)`.
#[derive(Clone)]
pub struct Selector {
    pool_size: usize,
    random: Arc<dyn RandomSource>,
}

impl Selector {
    pub fn new(pool_size: usize, random: Arc<dyn RandomSource>) -> Self {
        Self {
            pool_size: pool_size.max(1),
            random,
        }
    }

    pub fn with_default_source() -> Self {
        Self::new(TOP_POOL_SIZE, Arc::new(ThreadRngSource))
    }

    pub fn select(&self, mut scored: Vec<ScoredCandidate>) -> Option<ScoredCandidate> {
        if scored.is_empty() {
            return None;
        }

        // sort_by is stable: ties keep their input order
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let pool = scored.len().min(self.pool_size);
        let index = self.random.pick_index(pool);
        Some(scored.swap_remove(index))
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("pool_size", &self.pool_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExchangeTypes, MailLocation, Penpal};

    fn scored(id: &str, score: u32) -> ScoredCandidate {
        ScoredCandidate {
            candidate: Penpal {
                id: id.to_string(),
                name: format!("Penpal {}", id),
                street_address: "1 Letter Ln".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62701".to_string(),
                country: "US".to_string(),
                interests: "letters".to_string(),
                discord_handle: None,
                mail_location: MailLocation::International,
                exchange_types: ExchangeTypes { letters: true, ..Default::default() },
                created_at: None,
            },
            score,
        }
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(0)));
        assert!(selector.select(vec![]).is_none());
    }

    #[test]
    fn test_fixed_source_picks_by_rank() {
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(0)));
        let chosen = selector
            .select(vec![scored("low", 5), scored("high", 30), scored("mid", 10)])
            .unwrap();
        assert_eq!(chosen.candidate.id, "high");
        assert_eq!(chosen.score, 30);

        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(2)));
        let chosen = selector
            .select(vec![scored("low", 5), scored("high", 30), scored("mid", 10)])
            .unwrap();
        assert_eq!(chosen.candidate.id, "low");
    }

    #[test]
    fn test_draw_confined_to_top_three() {
        // Index beyond the pool clamps to the last pool slot, never to the
        // fourth-ranked candidate
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(99)));
        let chosen = selector
            .select(vec![
                scored("a", 40),
                scored("b", 30),
                scored("c", 20),
                scored("d", 10),
            ])
            .unwrap();
        assert_eq!(chosen.candidate.id, "c");
    }

    #[test]
    fn test_pool_shrinks_to_input_size() {
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(2)));
        let chosen = selector.select(vec![scored("only", 1)]).unwrap();
        assert_eq!(chosen.candidate.id, "only");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let selector = Selector::new(TOP_POOL_SIZE, Arc::new(FixedSource(0)));
        let chosen = selector
            .select(vec![scored("first", 10), scored("second", 10)])
            .unwrap();
        assert_eq!(chosen.candidate.id, "first");
    }

    #[test]
    fn test_thread_rng_stays_in_bounds() {
        let source = ThreadRngSource;
        for _ in 0..100 {
            assert!(source.pick_index(3) < 3);
        }
        assert_eq!(source.pick_index(1), 0);
    }
}
