use serde::{Deserialize, Serialize};

use crate::models::domain::MatchedPenpal;

/// Response for the find match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchResponse {
    pub success: bool,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedPenpal>,
    /// Stable machine-readable error kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FindMatchResponse {
    pub fn found(matched: MatchedPenpal) -> Self {
        Self {
            success: true,
            matched: Some(matched),
            error: None,
            message: None,
        }
    }

    pub fn failed(error: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            matched: None,
            error: Some(error.to_string()),
            message: Some(message.into()),
        }
    }
}

/// Response for the create penpal endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePenpalResponse {
    pub success: bool,
    #[serde(rename = "penpalId", skip_serializing_if = "Option::is_none")]
    pub penpal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for the delete penpal endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePenpalResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
