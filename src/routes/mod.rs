// Route exports
pub mod matches;

use actix_web::web;
use crate::error::handle_json_payload_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(matches::root))
        .route("/health", web::get().to(matches::health_check))
        .service(web::scope("/api").configure(matches::configure));
}

/// JSON extractor config: body size limit and `invalid_json` error bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}
