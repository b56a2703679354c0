use actix_web::{web, HttpResponse, Responder};
use crate::core::find_best_match;
use crate::error::ApiError;
use crate::models::{HealthResponse, MatchOutcome, MatchRequest, MatchResponse, MessageResponse};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(find_match));
}

/// Service banner
pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Matching Service is Running!")
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find match endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "currentUser": { "userId": "u1", "interestVector": [1, 0, 0], "interests": ["chess"] },
///   "otherUsers": [{ "userId": "u2", "interestVector": [1, 0], "interests": ["chess"] }]
/// }
/// ```
async fn find_match(req: web::Json<MatchRequest>) -> Result<HttpResponse, ApiError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("find_match", %request_id);
    let _enter = span.enter();

    let (current, candidates) = req.into_inner().into_parts().map_err(|e| {
        tracing::info!("Rejected match request: {}", e);
        e
    })?;

    tracing::info!("Finding match for user: {}, candidates: {}", current.id, candidates.len());

    let outcome = find_best_match(&current, &candidates).map_err(|e| {
        tracing::error!("Match computation failed for {}: {}", current.id, e);
        e
    })?;

    let response = match outcome {
        MatchOutcome::Matched(result) => {
            tracing::info!(
                "Matched user {} with {:?} (similarity {:.4}, {} shared interests)",
                current.id,
                result.matched_id,
                result.similarity,
                result.shared_attributes.len()
            );
            HttpResponse::Ok().json(MatchResponse::from(result))
        }
        MatchOutcome::NoCandidates => {
            tracing::info!("No candidates supplied for {}", current.id);
            HttpResponse::NotFound().json(MessageResponse::new("No users available for matching"))
        }
        MatchOutcome::NoMatch => {
            tracing::info!("No usable candidate for {}", current.id);
            HttpResponse::NotFound().json(MessageResponse::new("No suitable match found"))
        }
    };

    Ok(response)
}
