use crate::AppState;
use crate::database::Row;
use crate::error::ApiResult;
use axum::{Json, Router, extract::State, routing::get};

pub const LIST_PAGES_SQL: &str = "SELECT * FROM pages ORDER BY created_at DESC";

pub fn pages_router() -> Router<AppState> {
    Router::new().route("/pages", get(list_pages_handler))
}

async fn list_pages_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Row>>> {
    super::list_rows(state.db.as_ref(), LIST_PAGES_SQL, "Failed to fetch pages").await
}
