use serde::{Deserialize, Serialize};
use crate::models::domain::{EntityId, MatchResult};

/// Response for a successful match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matched_user_id: Option<EntityId>,
    pub similarity_score: f64,
    pub matched_user_interests: Vec<String>,
}

impl From<MatchResult> for MatchResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            matched_user_id: result.matched_id,
            similarity_score: result.similarity,
            matched_user_interests: result.shared_attributes.into_iter().collect(),
        }
    }
}

/// Informational response (no candidates, no match)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
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
