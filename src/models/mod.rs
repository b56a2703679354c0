// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Entity, EntityId, MatchOutcome, MatchResult};
pub use requests::{MatchRequest, UserPayload};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, MessageResponse};
