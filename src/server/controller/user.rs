use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CookDto, CreateCookDto, GeneratedPinDto},
    },
    server::{
        controller::util::get_user::get_admin_from_session, error::Error, model::app::AppState,
        service::user::UserService, util::time::local_now,
    },
};

pub static USER_TAG: &str = "user";

/// Lists the cooks of the admin's organization
#[utoipa::path(
    get,
    path = "/api/users/cooks",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Cooks sorted by username", body = Vec<CookDto>),
        (status = 403, description = "Only administrators can manage cooks", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cooks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin_from_session(&state, &session).await?;

    let cooks = UserService::new(&state.db)
        .get_cooks(admin.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(cooks)))
}

/// Creates a cook account in the admin's organization
#[utoipa::path(
    post,
    path = "/api/users/cooks",
    tag = USER_TAG,
    request_body = CreateCookDto,
    responses(
        (status = 201, description = "Cook created", body = CookDto),
        (status = 400, description = "Invalid username or PIN", body = ErrorDto),
        (status = 403, description = "Only administrators can manage cooks", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cook(
    State(state): State<AppState>,
    session: Session,
    Json(cook): Json<CreateCookDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin_from_session(&state, &session).await?;

    let cook = UserService::new(&state.db)
        .create_cook(admin.organization_id, cook, local_now())
        .await?;

    Ok((StatusCode::CREATED, Json(cook)))
}

/// Suggests a random 4-digit PIN for a new cook
#[utoipa::path(
    get,
    path = "/api/users/cooks/pin",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Random PIN", body = GeneratedPinDto),
        (status = 403, description = "Only administrators can manage cooks", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_pin(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_admin_from_session(&state, &session).await?;

    Ok((
        StatusCode::OK,
        Json(GeneratedPinDto {
            pin: UserService::generate_pin(),
        }),
    ))
}
