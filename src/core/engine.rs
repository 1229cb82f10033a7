use async_trait::async_trait;
use thiserror::Error;

use crate::core::filters::build_candidate_query;
use crate::core::scoring::score_candidate;
use crate::core::selector::Selector;
use crate::models::{CandidateQuery, MatchedPenpal, Penpal, ScoredCandidate};

/// Failure surfaced by a store implementation. Carries enough for logging
/// without committing the engine to any particular backend's error type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("data corruption: {0}")]
    Corrupt(String),
}

/// Read access to the penpal directory.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Penpal>, StoreError>;

    /// Execute the eligibility query. Results are capped at `query.limit`
    /// and ordered deterministically (stable order by id) so repeated
    /// calls against identical store state return the same set.
    async fn query_candidates(&self, query: &CandidateQuery) -> Result<Vec<Penpal>, StoreError>;
}

/// Append-only log of requester -> candidate pairings.
#[async_trait]
pub trait MatchHistoryStore: Send + Sync {
    async fn list_matched_ids(&self, penpal_id: &str) -> Result<Vec<String>, StoreError>;

    async fn append(
        &self,
        penpal_id: &str,
        matched_with: &str,
        matched_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StoreError>;
}

/// Outcomes of a match request that are not a match.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Zero candidates survived exclusion, location, and exchange-type
    /// filtering. User-actionable: broaden preferences or wait.
    #[error("no eligible candidates after filtering")]
    NoCandidates,

    /// The eligible set was non-empty but selection produced nothing. Kept
    /// distinct from NoCandidates for diagnostics.
    #[error("no scored matches to select from")]
    NoScoredMatches,

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl MatchError {
    /// Stable machine-readable kind, for API responses and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::NotFound(_) => "not_found",
            MatchError::NoCandidates => "no_candidates",
            MatchError::NoScoredMatches => "no_scored_matches",
            MatchError::Store(_) => "store_failure",
        }
    }
}

/// Orchestrates one match request: load requester, read history, filter,
/// score, select, record. Holds no state of its own beyond injected
/// collaborators; everything the no-repeat invariant needs is re-read from
/// the history store on every call.
pub struct MatchingEngine {
    profiles: std::sync::Arc<dyn ProfileStore>,
    history: std::sync::Arc<dyn MatchHistoryStore>,
    selector: Selector,
    candidate_limit: usize,
}

impl MatchingEngine {
    pub fn new(
        profiles: std::sync::Arc<dyn ProfileStore>,
        history: std::sync::Arc<dyn MatchHistoryStore>,
        selector: Selector,
        candidate_limit: usize,
    ) -> Self {
        Self {
            profiles,
            history,
            selector,
            candidate_limit,
        }
    }

    /// Find a single match for the given requester.
    ///
    /// The chosen pairing is recorded before this returns; a candidate is
    /// never handed back without a history entry, so the no-repeat
    /// invariant holds for every future call. Failure paths write nothing.
    pub async fn find_match(&self, requester_id: &str) -> Result<MatchedPenpal, MatchError> {
        let requester = self
            .profiles
            .get_by_id(requester_id)
            .await?
            .ok_or(MatchError::NotFound("requester"))?;

        let matched_ids = self.history.list_matched_ids(requester_id).await?;
        tracing::debug!(
            requester = %requester_id,
            excluded = matched_ids.len(),
            "excluding previously matched penpals"
        );

        let query = build_candidate_query(&requester, &matched_ids, self.candidate_limit);
        let candidates = self.profiles.query_candidates(&query).await?;

        if candidates.is_empty() {
            tracing::info!(requester = %requester_id, "no eligible candidates");
            return Err(MatchError::NoCandidates);
        }

        let scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|candidate| {
                let score = score_candidate(&requester, &candidate);
                ScoredCandidate { candidate, score }
            })
            .collect();

        tracing::debug!(
            requester = %requester_id,
            candidates = scored.len(),
            top_score = scored.iter().map(|s| s.score).max().unwrap_or(0),
            "scored eligible candidates"
        );

        let chosen = self
            .selector
            .select(scored)
            .ok_or(MatchError::NoScoredMatches)?;

        // Record before returning. If the write fails the whole call
        // fails, so history never lags behind what a caller has seen.
        self.history
            .append(requester_id, &chosen.candidate.id, chrono::Utc::now())
            .await?;

        tracing::info!(
            requester = %requester_id,
            matched = %chosen.candidate.id,
            score = chosen.score,
            "recorded match"
        );

        Ok(MatchedPenpal::from(chosen.candidate))
    }
}
