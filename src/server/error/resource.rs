use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::{model::label::LabelStatus, server::error::error_response};

/// Errors about rows of the caller's organization.
///
/// Rows belonging to another organization are reported as not found.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Label {0} not found")]
    LabelNotFound(Uuid),
    #[error("Product {0} not found")]
    ProductNotFound(Uuid),
    #[error("Template {0} not found")]
    TemplateNotFound(String),
    #[error("Organization {0} not found")]
    OrganizationNotFound(Uuid),
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("Label cannot change from {} to {}", .from.as_str(), .to.as_str())]
    InvalidStatusTransition { from: LabelStatus, to: LabelStatus },
    #[error("Built-in template {0:?} cannot be changed")]
    BuiltInTemplate(String),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::LabelNotFound(_)
            | Self::ProductNotFound(_)
            | Self::TemplateNotFound(_)
            | Self::OrganizationNotFound(_) => StatusCode::NOT_FOUND,
            Self::UsernameTaken(_)
            | Self::InvalidStatusTransition { .. }
            | Self::BuiltInTemplate(_) => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}
