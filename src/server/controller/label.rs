use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        label::{
            CreateLabelDto, ExpirationAlertDto, FoodLabelDto, LabelQuery, UpdateLabelStatusDto,
        },
        print::{PrintJobDto, PrintRequestDto},
        qr::QrPayload,
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::label::LabelService, util::time::local_now,
    },
};

pub static LABEL_TAG: &str = "label";

/// Lists the active labels of the user's organization, most urgent first
#[utoipa::path(
    get,
    path = "/api/labels",
    tag = LABEL_TAG,
    params(LabelQuery),
    responses(
        (status = 200, description = "Active labels sorted by expiration", body = Vec<FoodLabelDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_labels(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LabelQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let labels = LabelService::new(&state.db)
        .get_labels(user.organization_id, &query, local_now())
        .await?;

    Ok((StatusCode::OK, Json(labels)))
}

/// Creates a label
///
/// Production defaults to the current time and expiration to the product's default
/// validity when omitted.
#[utoipa::path(
    post,
    path = "/api/labels",
    tag = LABEL_TAG,
    request_body = CreateLabelDto,
    responses(
        (status = 201, description = "Label created", body = FoodLabelDto),
        (status = 400, description = "Invalid label", body = ErrorDto),
        (status = 404, description = "User or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_label(
    State(state): State<AppState>,
    session: Session,
    Json(label): Json<CreateLabelDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let label = LabelService::new(&state.db)
        .create_label(user.organization_id, label, local_now())
        .await?;

    Ok((StatusCode::CREATED, Json(label)))
}

/// Marks an active label as used or discarded
#[utoipa::path(
    put,
    path = "/api/labels/{label_id}/status",
    tag = LABEL_TAG,
    params(("label_id" = Uuid, Path, description = "Label ID")),
    request_body = UpdateLabelStatusDto,
    responses(
        (status = 200, description = "Label updated", body = FoodLabelDto),
        (status = 404, description = "User or label not found", body = ErrorDto),
        (status = 409, description = "Label is no longer active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_label_status(
    State(state): State<AppState>,
    session: Session,
    Path(label_id): Path<Uuid>,
    Json(update): Json<UpdateLabelStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let label = LabelService::new(&state.db)
        .update_status(user.organization_id, label_id, update.status)
        .await?;

    Ok((StatusCode::OK, Json(label)))
}

/// Expired, expiring today and expiring soon alerts
#[utoipa::path(
    get,
    path = "/api/labels/alerts",
    tag = LABEL_TAG,
    responses(
        (status = 200, description = "The three alerts, possibly empty", body = Vec<ExpirationAlertDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let alerts = LabelService::new(&state.db)
        .get_alerts(user.organization_id, local_now())
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}

/// QR code payload of a label
#[utoipa::path(
    get,
    path = "/api/labels/{label_id}/qr",
    tag = LABEL_TAG,
    params(("label_id" = Uuid, Path, description = "Label ID")),
    responses(
        (status = 200, description = "QR payload", body = QrPayload),
        (status = 404, description = "User or label not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_label_qr(
    State(state): State<AppState>,
    session: Session,
    Path(label_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let payload = LabelService::new(&state.db)
        .get_qr_payload(user.organization_id, label_id)
        .await?;

    Ok((StatusCode::OK, Json(payload)))
}

/// Builds the printer commands for the selected labels
#[utoipa::path(
    post,
    path = "/api/labels/print",
    tag = LABEL_TAG,
    request_body = PrintRequestDto,
    responses(
        (status = 200, description = "Print job", body = PrintJobDto),
        (status = 400, description = "Empty selection, unknown printer or invalid copies", body = ErrorDto),
        (status = 404, description = "User, label or template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn print_labels(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<PrintRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job = LabelService::new(&state.db)
        .print_labels(user.organization_id, &request)
        .await?;

    Ok((StatusCode::OK, Json(job)))
}
