use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use food_donation_api::config::{CorsSettings, Settings};
use food_donation_api::{configure_routes, json_config, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn build_cors(settings: &CorsSettings) -> Cors {
    match settings.origins() {
        None => Cors::permissive(),
        Some(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("info", "compact");
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting XYLMCSCICS API server on port {}", settings.server.port);

    let app_state = AppState::from_settings(&settings).map_err(|e| {
        error!("Failed to create HTTP clients: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if app_state.intent.is_configured() {
        info!("OpenAI API key configured. Chat endpoint is ready (model: {})", app_state.intent.model());
    } else {
        warn!("OPENAI_API_KEY not configured. Chat endpoint will not work.");
    }

    if !app_state.planner.distance_configured() {
        info!("GOOGLE_MAPS_API_KEY not configured. Route distance and duration will be Unknown.");
    }

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Route endpoint: http://localhost:{}/route", port);
    info!("Chat endpoint: http://localhost:{}/chat", port);
    info!("Match endpoint: http://localhost:{}/match", port);
    info!("Health check: http://localhost:{}/health", port);

    let cors_settings = settings.cors.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config())
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
