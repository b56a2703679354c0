//! Interest Matcher - stateless best-match service over interest vectors
//!
//! Given one user's interest vector and a list of candidates, picks the
//! candidate with the highest cosine similarity and reports the interests
//! the two share.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, find_best_match, CandidateVector, FeatureVector};
pub use error::{ApiError, MatchError};
pub use models::{Candidate, Entity, EntityId, MatchOutcome, MatchRequest, MatchResponse, MatchResult};
