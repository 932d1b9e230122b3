//! Error types for the Etiqueta server application.
//!
//! This module provides the error handling system of the server with specialized error types
//! for each domain (authentication, configuration, form validation, stored resources). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for their
//! `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationError},
    server::error::{auth::AuthError, config::ConfigError, resource::ResourceError},
};

/// Main error type for the Etiqueta server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, PIN verification, admin access)
/// - Validation errors (rejected form input)
/// - Resource errors (missing rows, conflicts)
/// - External library errors (database, sessions, blocking tasks)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, PIN verification, role checks).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Rejected form input, the message is shown to the user.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Missing or conflicting resource within the user's organization.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Etiqueta's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error with Etiqueta's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// PIN hashing error (argon2 parameters, malformed stored hash).
    #[error("Failed to hash or verify PIN: {0}")]
    PinHashError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Blocking task failed to complete (panicked or was cancelled).
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
    /// Serialization error (QR payload encoding).
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For rejected form input
/// - 401 Unauthorized - For a wrong username or PIN
/// - 403 Forbidden - For cooks calling admin routes
/// - 404 Not Found - For missing users or resources
/// - 409 Conflict - For duplicate usernames, illegal status changes, built-in templates
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the given status and message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
