use crate::AppState;
use crate::database::{ContentDatabase, Row};
use crate::error::{ApiError, ApiResult};
use axum::{Json, Router};

pub mod health;
pub mod home;
pub mod pages;
pub mod posts;

/// Every JSON endpoint, meant to be nested under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(pages::pages_router())
        .merge(posts::posts_router())
}

// shared body of the list endpoints: run one fixed query, hand the rows back untouched
async fn list_rows(
    db: &dyn ContentDatabase,
    sql: &str,
    failure_context: &'static str,
) -> ApiResult<Json<Vec<Row>>> {
    let rows = db
        .query(sql)
        .await
        .map_err(|e| ApiError::query(failure_context, e))?;

    tracing::debug!(rows = rows.len(), sql, "Listed rows");

    Ok(Json(rows))
}
