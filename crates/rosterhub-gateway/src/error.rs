//! Gateway error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// No route table prefix matches the request path.
    #[error("no route for path: {0}")]
    NoRoute(String),

    /// The route table failed load-time validation.
    #[error("invalid route table: {0}")]
    InvalidTable(String),

    /// The route file could not be read or parsed.
    #[error("bad route config: {0}")]
    Config(String),

    /// The upstream leg of the proxy failed.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::NoRoute(_) => StatusCode::NOT_FOUND,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
