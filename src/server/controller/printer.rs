use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        print::{printers, PrinterDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
    },
};

pub static PRINTER_TAG: &str = "printer";

/// Lists the printers labels can be sent to
#[utoipa::path(
    get,
    path = "/api/printers",
    tag = PRINTER_TAG,
    responses(
        (status = 200, description = "Printer catalog", body = Vec<PrinterDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_printers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(printers())))
}
