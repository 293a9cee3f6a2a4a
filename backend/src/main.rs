use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers {
    pub mod image_dtos;
    pub mod image_handlers;
}
mod api {
    pub mod gemini;
}

use api::gemini::{GeminiClient, ImageGenerator};
use config::Config;
use handlers::image_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    image_generator: Arc<dyn ImageGenerator>,
}

/// API routes with tracing and CORS; no static files.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/images/generate", post(image_handlers::generate_image))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the dev server runs the frontend on another port
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

/// The API plus the built frontend. Unknown paths get `index.html`.
pub fn app(state: Arc<AppState>, frontend_dist: &Path) -> Router {
    let site = ServeDir::new(frontend_dist)
        .not_found_service(ServeFile::new(frontend_dist.join("index.html")));

    api_router(state).fallback_service(site)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let generator = GeminiClient::new(&config)?;
    let state = Arc::new(AppState {
        image_generator: Arc::new(generator),
    });

    if !config.frontend_dist.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; only the API will be useful",
            config.frontend_dist.display()
        );
    }

    let app = app(state, &config.frontend_dist);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
