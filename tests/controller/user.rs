use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use etiqueta::{
    model::user::{CookDto, CreateCookDto, GeneratedPinDto},
    server::controller::user::{create_cook, generate_pin, get_cooks},
};
use etiqueta_test_utils::prelude::*;

use super::{app_state, json_body, sign_in};

mod get_cooks {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the organization's cooks for an admin
    async fn lists_cooks_for_admin() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let resp = get_cooks(State(app_state(&test)), test.session.clone())
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let cooks: Vec<CookDto> = json_body(resp).await;
        assert_eq!(cooks.len(), 1);
        assert_eq!(cooks[0].id, cook.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 403 forbidden for a cook
    async fn forbids_cooks() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let result = get_cooks(State(app_state(&test)), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod create_cook {
    use super::*;

    #[tokio::test]
    /// Expect 201 created for a new username
    async fn creates_cook() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, admin, _cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let resp = create_cook(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateCookDto {
                username: "maria".to_string(),
                pin: "5678".to_string(),
            }),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let cook: CookDto = json_body(resp).await;
        assert_eq!(cook.username, "maria");

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 conflict for a username already in use
    async fn rejects_duplicate_username() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let result = create_cook(
            State(app_state(&test)),
            test.session.clone(),
            Json(CreateCookDto {
                username: cook.username.clone(),
                pin: "5678".to_string(),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod generate_pin {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with a 4-digit PIN for an admin
    async fn returns_pin() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, admin, _cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let resp = generate_pin(State(app_state(&test)), test.session.clone())
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: GeneratedPinDto = json_body(resp).await;
        assert_eq!(body.pin.len(), 4);

        Ok(())
    }
}
