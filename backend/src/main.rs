//! Main entry point for the marketing events backend.
//!
//! This file initializes the Axum web server, builds the data service
//! gateway and session layer, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall
//! structure.

mod api;
mod auth;
mod config;
mod errors;
mod gateway;

#[cfg(test)]
mod test_support;

use crate::gateway::{Gateway, RestGateway};
use axum::http::{Method, header};
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::Key;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let gateway: Arc<dyn Gateway> = Arc::new(RestGateway::new(&config));

    let app = app(gateway, &config);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting events backend on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

/// Assembles the full application router.
fn app(gateway: Arc<dyn Gateway>, config: &Config) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_name("session")
        .with_secure(false)
        .with_signed(Key::derive_from(config.session_secret.as_bytes()));

    // Credentialed CORS cannot use the wildcard origin, so the request
    // origin is mirrored back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/health", get(health_handler))
        .merge(auth::routes::auth_router())
        .nest("/events", api::event::routes::event_router());

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(Extension(gateway))
        .layer(sessions)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "Marketing Events Backend",
        "version": "0.1.0"
    }))
}
