//! Penpal Algo - Matching service for the penpal directory
//!
//! This library provides the matching engine behind the penpal directory:
//! candidate filtering, affinity scoring, randomized top-K selection, and
//! append-only match-history bookkeeping.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{MatchError, MatchingEngine, Selector};
pub use models::{
    CandidateQuery, ExchangeType, ExchangeTypes, FindMatchResponse, MailLocation, MatchedPenpal,
    Penpal, ScoredCandidate,
};
