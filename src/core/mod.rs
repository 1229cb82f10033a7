// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod scoring;
pub mod selector;

pub use engine::{MatchError, MatchHistoryStore, MatchingEngine, ProfileStore, StoreError};
pub use filters::{build_candidate_query, matches_query, CANDIDATE_LIMIT};
pub use scoring::score_candidate;
pub use selector::{FixedSource, RandomSource, Selector, ThreadRngSource, TOP_POOL_SIZE};
