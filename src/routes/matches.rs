use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{MatchError, MatchingEngine};
use crate::models::{ErrorResponse, FindMatchRequest, FindMatchResponse, HealthResponse};
use crate::services::{DirectoryClient, HistoryClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub history: Arc<HistoryClient>,
    pub engine: Arc<MatchingEngine>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_match))
        .route("/matches/history", web::get().to(get_match_history));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.directory.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find match endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "penpalId": "string"
/// }
/// ```
async fn find_match(
    state: web::Data<AppState>,
    req: web::Json<FindMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Finding match for penpal: {}", req.penpal_id);

    match state.engine.find_match(&req.penpal_id).await {
        Ok(matched) => {
            tracing::info!("Matched penpal {} with {}", req.penpal_id, matched.id);
            HttpResponse::Ok().json(FindMatchResponse::found(matched))
        }
        Err(err @ MatchError::NotFound(_)) => {
            tracing::info!("Requester {} not found", req.penpal_id);
            HttpResponse::NotFound().json(FindMatchResponse::failed(
                err.kind(),
                "Penpal not found. Please join the directory first.",
            ))
        }
        // Expected negative outcomes: the directory has nothing left to
        // offer this requester right now
        Err(err @ (MatchError::NoCandidates | MatchError::NoScoredMatches)) => {
            tracing::info!(
                requester = %req.penpal_id,
                kind = err.kind(),
                "no match available"
            );
            HttpResponse::Ok().json(FindMatchResponse::failed(
                err.kind(),
                "No available matches found. Try again later or broaden your exchange preferences.",
            ))
        }
        Err(err @ MatchError::Store(_)) => {
            // Full detail stays in the log; the caller gets a generic kind
            tracing::error!("Match request for {} failed: {}", req.penpal_id, err);
            HttpResponse::InternalServerError().json(FindMatchResponse::failed(
                err.kind(),
                "An error occurred while finding a match.",
            ))
        }
    }
}

/// Get match history for a penpal
///
/// GET /api/v1/matches/history?penpalId={penpalId}
///
/// Returns the directed list of past pairings for this penpal, for
/// client-side synchronization and debugging purposes.
async fn get_match_history(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let penpal_id = match query.get("penpalId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing penpalId parameter".to_string(),
                message: "penpalId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.history.list_records(penpal_id).await {
        Ok(records) => {
            let count = records.len();
            HttpResponse::Ok().json(serde_json::json!({
                "penpalId": penpal_id,
                "matches": records,
                "count": count,
            }))
        }
        Err(e) => {
            tracing::error!("Failed to fetch match history for {}: {}", penpal_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch match history".to_string(),
                message: "An error occurred while reading match history.".to_string(),
                status_code: 500,
            })
        }
    }
}
