use crate::AppState;
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

// always 200: a dead database is reported in the body, the process itself is alive
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
