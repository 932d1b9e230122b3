//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint with its OpenAPI specification and serves
//! Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/pin`, `GET /api/auth/logout`, `GET /api/auth/user`,
///   `GET /api/auth/organization`
/// - `GET|POST /api/products`
/// - `GET|POST /api/labels`, `PUT /api/labels/{label_id}/status`, `GET /api/labels/alerts`,
///   `GET /api/labels/{label_id}/qr`, `POST /api/labels/print`
/// - `GET /api/printers`
/// - `GET /api/analytics`
/// - `GET|POST /api/users/cooks`, `GET /api/users/cooks/pin` (admins only)
/// - `GET|POST /api/templates`, `PUT|DELETE /api/templates/{template_id}`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Etiqueta", description = "Etiqueta food labeling API"), tags(
        (name = controller::auth::AUTH_TAG, description = "PIN authentication"),
        (name = controller::product::PRODUCT_TAG, description = "Product catalog"),
        (name = controller::label::LABEL_TAG, description = "Food labels, alerts, QR codes and printing"),
        (name = controller::printer::PRINTER_TAG, description = "Printer catalog"),
        (name = controller::analytics::ANALYTICS_TAG, description = "Dashboard analytics"),
        (name = controller::user::USER_TAG, description = "Cook management for administrators"),
        (name = controller::template::TEMPLATE_TAG, description = "Label templates"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::pin_login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::get_organization))
        .routes(routes!(
            controller::product::get_products,
            controller::product::create_product
        ))
        .routes(routes!(
            controller::label::get_labels,
            controller::label::create_label
        ))
        .routes(routes!(controller::label::update_label_status))
        .routes(routes!(controller::label::get_alerts))
        .routes(routes!(controller::label::get_label_qr))
        .routes(routes!(controller::label::print_labels))
        .routes(routes!(controller::printer::get_printers))
        .routes(routes!(controller::analytics::get_analytics))
        .routes(routes!(
            controller::user::get_cooks,
            controller::user::create_cook
        ))
        .routes(routes!(controller::user::generate_pin))
        .routes(routes!(
            controller::template::get_templates,
            controller::template::create_template
        ))
        .routes(routes!(
            controller::template::update_template,
            controller::template::delete_template
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
