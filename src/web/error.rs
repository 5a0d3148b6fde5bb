//! Maps crate errors onto HTTP responses.
//!
//! A failed request answers `500` with `{"error": "..."}` and is logged; other
//! requests and the process are unaffected. Malformed JSON bodies never get
//! here, the `Json` extractor rejects them first.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
