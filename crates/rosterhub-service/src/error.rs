//! Service error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rosterhub_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors a roster backend can produce while handling a request.
///
/// Everything maps to HTTP 500 with an `{"error": description}` payload.
/// There is no finer-grained error taxonomy; clients only distinguish
/// "worked" from "did not".
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("cannot decode request body: {0}")]
    BadBody(String),

    #[error("bad configuration: {0}")]
    Config(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
