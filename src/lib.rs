// Library root - shared by the binary and the integration tests

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use services::{Mailer, ViewStore};

/// Per-process handles injected into every handler. Built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ViewStore>,
    pub mailer: Arc<dyn Mailer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/send-email", post(handlers::send_email))
        .route("/track/:id", get(handlers::track_pixel))
        .route("/logs", get(handlers::get_logs))
        .layer(axum::middleware::from_fn(middleware::security_headers_middleware))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
