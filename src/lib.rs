use crate::config::MirrorConfig;
use crate::database::ContentDatabase;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod features;
pub mod integrity;
pub mod views;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn ContentDatabase>,
    pub config: Arc<MirrorConfig>,
}

/// Composes every feature router into the full application.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(features::home::home_router(&state))
        .merge(features::health::health_router())
        .nest("/api", features::api_router());

    // anything the api doesn't claim goes to the built frontend, if there is one
    let router = match &state.config.frontend_path {
        Some(frontend_path) => router.fallback_service(ServeDir::new(frontend_path)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
