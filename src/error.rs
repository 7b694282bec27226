use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors an endpoint handler can hand back to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The database call behind a list endpoint failed.
    ///
    /// Rendered as the fixed context immediately followed by the error text,
    /// e.g. `Failed to fetch postsno such table: posts`.
    #[error("{context}{cause}")]
    Query {
        context: &'static str,
        cause: anyhow::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn query(context: &'static str, cause: anyhow::Error) -> Self {
        ApiError::Query { context, cause }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            ApiError::Query { context, cause } => {
                tracing::error!(context = %context, error = %cause, "Query failed");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
