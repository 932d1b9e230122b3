use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use etiqueta::{
    model::product::{CreateProductDto, ProductDto, ProductQuery},
    server::controller::product::{create_product, get_products},
};
use etiqueta_test_utils::prelude::*;

use super::{app_state, json_body, sign_in};

mod get_products {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with products matching the department search
    async fn searches_by_department() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        test.kitchen()
            .insert_product(organization.id, "Salada Verde", 1, "Cozinha Fria")
            .await?;
        test.kitchen()
            .insert_product(organization.id, "Molho Sugo", 3, "Cozinha Quente")
            .await?;
        sign_in(&test, cook.id).await;

        let resp = get_products(
            State(app_state(&test)),
            test.session.clone(),
            Query(ProductQuery {
                search: Some("fria".to_string()),
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let products: Vec<ProductDto> = json_body(resp).await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Salada Verde");

        Ok(())
    }
}

mod create_product {
    use super::*;

    #[tokio::test]
    /// Expect 201 created for a valid product
    async fn creates_product() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let resp = create_product(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateProductDto {
                name: "Feijão".to_string(),
                default_validity_days: 3,
                department: "Cozinha Quente".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request for a validity above 30 days
    async fn rejects_validity_out_of_range() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let result = create_product(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateProductDto {
                name: "Feijão".to_string(),
                default_validity_days: 45,
                department: "Cozinha Quente".to_string(),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
