use crate::AppState;
use crate::database::Row;
use crate::error::ApiResult;
use axum::{Json, Router, extract::State, routing::get};

pub const LIST_POSTS_SQL: &str = "SELECT * FROM posts ORDER BY created_at DESC";
pub const LIST_SEO_POSTS_SQL: &str =
    "SELECT * FROM posts WHERE seo_title IS NOT NULL ORDER BY created_at DESC";

pub fn posts_router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/seo", get(list_seo_posts_handler))
}

async fn list_posts_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Row>>> {
    super::list_rows(state.db.as_ref(), LIST_POSTS_SQL, "Failed to fetch posts").await
}

// same rows as /posts, restricted to the ones carrying SEO metadata
async fn list_seo_posts_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Row>>> {
    super::list_rows(
        state.db.as_ref(),
        LIST_SEO_POSTS_SQL,
        "Failed to fetch SEO data",
    )
    .await
}
