use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{analytics::LabelAnalyticsDto, api::ErrorDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::label::LabelService, util::time::local_now,
    },
};

pub static ANALYTICS_TAG: &str = "analytics";

/// Dashboard analytics over every label of the user's organization
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Label analytics", body = LabelAnalyticsDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let analytics = LabelService::new(&state.db)
        .get_analytics(user.organization_id, local_now())
        .await?;

    Ok((StatusCode::OK, Json(analytics)))
}
