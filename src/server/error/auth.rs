use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0} not found in database despite having an active session")]
    UserNotInDatabase(Uuid),
    /// Unknown username, missing PIN, and wrong PIN all map here
    #[error("Invalid username or PIN")]
    InvalidCredentials,
    #[error("User ID {0} attempted an admin-only action")]
    AdminRequired(Uuid),
}

impl AuthError {
    fn user_not_found() -> Response {
        error_response(StatusCode::NOT_FOUND, "User not found")
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::user_not_found()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::user_not_found()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid username or PIN")
            }
            Self::AdminRequired(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "Only administrators can manage cooks",
                )
            }
        }
    }
}
