use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fira_compare::app::{configure_app, AppState};
use fira_compare::config::Config;
use fira_compare::middleware::RequestId;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config.app.log_level, &config.app.log_format);

    tracing::info!("Starting FIRA fee comparison service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = web::Data::new(AppState::from_config(&config).context("Failed to build application state")?);
    tracing::info!(
        processor = state.analysis.processor_name(),
        currency = %config.display.home_currency,
        locale = %config.display.locale,
        "FIRA processor ready"
    );

    let cors_origin = config.server.cors_allowed_origin.clone();
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(configure_app(state.clone()))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("fira_compare={},actix_web=info", log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if log_format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
