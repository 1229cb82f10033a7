// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateQuery, ExchangeType, ExchangeTypes, MailLocation, MatchRecord, MatchedPenpal, Penpal,
    ScoredCandidate,
};
pub use requests::{CreatePenpalRequest, FindMatchRequest};
pub use responses::{
    CreatePenpalResponse, DeletePenpalResponse, ErrorResponse, FindMatchResponse, HealthResponse,
};
