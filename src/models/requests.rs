use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use validator::Validate;

use crate::core::vector::{CandidateVector, FeatureVector};
use crate::error::MatchError;
use crate::models::domain::{Candidate, Entity, EntityId};

/// Request to find the best match for one user
///
/// Unknown fields (`socketId`, `email`, ...) are ignored. Candidates stay
/// raw JSON until the typed parse step so that a single malformed candidate
/// cannot fail the whole request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(rename = "currentUser", default)]
    pub current_user: Option<UserPayload>,
    #[serde(rename = "otherUsers", default)]
    pub other_users: Option<Vec<Value>>,
}

/// The current user as sent on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(required(message = "userId is required"))]
    #[serde(rename = "userId", default)]
    pub user_id: Option<EntityId>,
    #[validate(required(message = "interestVector is required"))]
    #[serde(rename = "interestVector", default)]
    pub interest_vector: Option<Value>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl MatchRequest {
    /// Typed parse step
    ///
    /// The current user must be present with a `userId` and a numeric
    /// `interestVector`; anything else is `MatchError::InvalidRequest`.
    /// Candidates are never rejected here, only their vectors are
    /// classified.
    pub fn into_parts(self) -> Result<(Entity, Vec<Candidate>), MatchError> {
        let current = self
            .current_user
            .ok_or_else(|| MatchError::InvalidRequest("currentUser is required".to_string()))?;
        current.validate()?;

        let vector = FeatureVector::parse(current.interest_vector.as_ref())
            .map_err(|reason| MatchError::InvalidRequest(reason.to_string()))?;

        let current = Entity {
            id: current
                .user_id
                .ok_or_else(|| MatchError::InvalidRequest("userId is required".to_string()))?,
            vector,
            attributes: collect_labels(current.interests),
        };

        let candidates = self
            .other_users
            .unwrap_or_default()
            .into_iter()
            .map(Candidate::from)
            .collect();

        Ok((current, candidates))
    }
}

/// Lenient candidate conversion
///
/// Any element of `otherUsers` becomes a candidate. A `userId` that is not a
/// string or an integer is dropped, non-string `interests` entries are
/// ignored, and the vector is classified rather than checked.
impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        let id = value
            .get("userId")
            .and_then(|id| serde_json::from_value::<EntityId>(id.clone()).ok());

        let attributes = value
            .get("interests")
            .and_then(Value::as_array)
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect::<BTreeSet<_>>()
            })
            .unwrap_or_default();

        Candidate {
            id,
            vector: CandidateVector::parse(value.get("interestVector")),
            attributes,
        }
    }
}

fn collect_labels(labels: Vec<String>) -> BTreeSet<String> {
    labels.into_iter().collect()
}
