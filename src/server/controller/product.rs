use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, ProductDto, ProductQuery},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::product::ProductService, util::time::local_now,
    },
};

pub static PRODUCT_TAG: &str = "product";

/// Lists the product catalog of the user's organization
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductQuery),
    responses(
        (status = 200, description = "Products sorted by name", body = Vec<ProductDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let products = ProductService::new(&state.db)
        .get_products(user.organization_id, query.search.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Adds a product to the catalog
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(product): Json<CreateProductDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let product = ProductService::new(&state.db)
        .create_product(user.organization_id, product, local_now())
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}
