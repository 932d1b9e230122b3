use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        template::{LabelTemplateDto, SaveTemplateDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::template::TemplateService, util::time::local_now,
    },
};

pub static TEMPLATE_TAG: &str = "template";

/// Lists the built-in templates followed by the organization's custom templates
#[utoipa::path(
    get,
    path = "/api/templates",
    tag = TEMPLATE_TAG,
    responses(
        (status = 200, description = "Label templates", body = Vec<LabelTemplateDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_templates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let templates = TemplateService::new(&state.db)
        .get_templates(user.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(templates)))
}

#[utoipa::path(
    post,
    path = "/api/templates",
    tag = TEMPLATE_TAG,
    request_body = SaveTemplateDto,
    responses(
        (status = 201, description = "Template created", body = LabelTemplateDto),
        (status = 400, description = "Invalid template", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    session: Session,
    Json(template): Json<SaveTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let template = TemplateService::new(&state.db)
        .create_template(user.organization_id, template, local_now())
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

#[utoipa::path(
    put,
    path = "/api/templates/{template_id}",
    tag = TEMPLATE_TAG,
    params(("template_id" = String, Path, description = "Custom template ID")),
    request_body = SaveTemplateDto,
    responses(
        (status = 200, description = "Template updated", body = LabelTemplateDto),
        (status = 400, description = "Invalid template", body = ErrorDto),
        (status = 404, description = "User or template not found", body = ErrorDto),
        (status = 409, description = "Built-in templates cannot be changed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_template(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<String>,
    Json(template): Json<SaveTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let template = TemplateService::new(&state.db)
        .update_template(user.organization_id, &template_id, template)
        .await?;

    Ok((StatusCode::OK, Json(template)))
}

#[utoipa::path(
    delete,
    path = "/api/templates/{template_id}",
    tag = TEMPLATE_TAG,
    params(("template_id" = String, Path, description = "Custom template ID")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "User or template not found", body = ErrorDto),
        (status = 409, description = "Built-in templates cannot be deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    TemplateService::new(&state.db)
        .delete_template(user.organization_id, &template_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
