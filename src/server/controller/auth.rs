use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{OrganizationIdDto, PinLoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Signs in with a username and 4-digit PIN
///
/// Stores the profile's ID in the session on success. The session ID is cycled first so an
/// ID issued before sign in cannot be reused.
#[utoipa::path(
    post,
    path = "/api/auth/pin",
    tag = AUTH_TAG,
    request_body = PinLoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Username or PIN missing", body = ErrorDto),
        (status = 401, description = "Invalid username or PIN", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pin_login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<PinLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.authenticate_with_pin(&login).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User signed in with PIN");

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that holds no data fails with the memory and redis stores
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Returns the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Returns the organization of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/organization",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Organization of the signed-in user", body = OrganizationIdDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_organization(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((
        StatusCode::OK,
        Json(OrganizationIdDto {
            organization_id: user.organization_id,
        }),
    ))
}
