use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::{model::validation::ValidationError, server::error::error_response};

/// Rejected input is a 400 carrying the user-facing message
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected input: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
