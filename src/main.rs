use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use interest_matcher::config::{CorsSettings, LoggingSettings, Settings};
use interest_matcher::routes;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn build_cors(settings: &CorsSettings) -> Cors {
    match &settings.allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();
    let logging = loaded
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Starting interest matching service...");

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.workers();
    let max_payload = settings.server.max_payload_bytes;
    let cors = settings.cors.clone();

    match &cors.allowed_origin {
        Some(origin) => info!("CORS restricted to origin {}", origin),
        None => info!("CORS permissive: no allowed origin configured"),
    }

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        App::new()
            .app_data(routes::json_config(max_payload))
            .wrap(build_cors(&cors))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
