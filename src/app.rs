use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, database, error::Result, routes};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

/// Creates the pool, initializes the schema, and assembles the router.
pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database);

    match database::run_migrations(&pool).await {
        Ok(()) => tracing::info!("Database initialized successfully"),
        Err(e) => tracing::error!("Database initialization failed: {}", e),
    }

    router(AppState { db: pool }, config)
}

pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let mut app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TraceLayer::new_for_http());

    if !config.cors.allowed_origins.is_empty() {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE])
            .allow_origin(allowed_origins);

        app = app.layer(cors);
    }

    Ok(app.with_state(state))
}
