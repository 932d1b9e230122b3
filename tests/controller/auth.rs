use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use etiqueta::{
    model::user::{OrganizationIdDto, PinLoginDto, UserDto},
    server::{
        controller::auth::{get_organization, get_user, logout, pin_login},
        model::session::user::SessionUserId,
    },
};
use etiqueta_test_utils::prelude::*;

use super::{app_state, json_body, sign_in};

mod pin_login {
    use super::*;

    #[tokio::test]
    /// Expect 200 success and the user ID in session for a correct PIN
    async fn signs_in_with_correct_pin() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;

        let result = pin_login(
            State(app_state(&test)),
            test.session.clone(),
            Json(PinLoginDto {
                username: cook.username.clone(),
                pin: "1234".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let user: UserDto = json_body(resp).await;
        assert_eq!(user.id, cook.id);

        let session_user_id = SessionUserId::get(&test.session).await.unwrap();
        assert_eq!(session_user_id, Some(cook.id));

        Ok(())
    }

    #[tokio::test]
    /// Expect the session ID issued before sign in to be replaced
    async fn cycles_session_id() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;

        test.session.insert("visited", true).await.unwrap();
        test.session.save().await.unwrap();
        let session_id_before_login = test.session.id();
        assert!(session_id_before_login.is_some());

        let result = pin_login(
            State(app_state(&test)),
            test.session.clone(),
            Json(PinLoginDto {
                username: cook.username.clone(),
                pin: "1234".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        test.session.save().await.unwrap();
        assert!(test.session.id().is_some());
        assert_ne!(test.session.id(), session_id_before_login);

        // Data stored before sign in carries over to the new ID
        let visited: Option<bool> = test.session.get("visited").await.unwrap();
        assert_eq!(visited, Some(true));
        let session_user_id = SessionUserId::get(&test.session).await.unwrap();
        assert_eq!(session_user_id, Some(cook.id));

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized for a wrong PIN without touching the session
    async fn rejects_wrong_pin() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;

        let result = pin_login(
            State(app_state(&test)),
            test.session.clone(),
            Json(PinLoginDto {
                username: cook.username.clone(),
                pin: "9999".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let session_user_id = SessionUserId::get(&test.session).await.unwrap();
        assert!(session_user_id.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized for an unknown username, same as a wrong PIN
    async fn rejects_unknown_username() -> Result<(), TestError> {
        let test = test_setup_with_label_tables!()?;

        let result = pin_login(
            State(app_state(&test)),
            test.session.clone(),
            Json(PinLoginDto {
                username: "ghost".to_string(),
                pin: "1234".to_string(),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 bad request when the PIN is blank
    async fn rejects_blank_pin() -> Result<(), TestError> {
        let test = test_setup_with_label_tables!()?;

        let result = pin_login(
            State(app_state(&test)),
            test.session.clone(),
            Json(PinLoginDto {
                username: "maria".to_string(),
                pin: String::new(),
            }),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    /// Expect 307 temporary redirect and a cleared session after logout
    async fn clears_session() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (_organization, admin, _cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let result = logout(test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let session_user_id = SessionUserId::get(&test.session).await.unwrap();
        assert!(session_user_id.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect 307 temporary redirect even without session data
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = logout(test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

        Ok(())
    }
}

mod get_user {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the signed-in user
    async fn returns_signed_in_user() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, admin, _cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, admin.id).await;

        let resp = get_user(State(app_state(&test)), test.session.clone())
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let user: UserDto = json_body(resp).await;
        assert_eq!(user.organization_id, organization.id);
        assert!(user.is_admin());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found without a user in session
    async fn returns_not_found_without_session() -> Result<(), TestError> {
        let test = test_setup_with_label_tables!()?;

        let result = get_user(State(app_state(&test)), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables don't exist
    async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        sign_in(&test, uuid::Uuid::new_v4()).await;

        let result = get_user(State(app_state(&test)), test.session.clone()).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_organization {
    use super::*;

    #[tokio::test]
    /// Expect 200 success with the organization of the signed-in cook
    async fn returns_organization_id() -> Result<(), TestError> {
        let mut test = test_setup_with_label_tables!()?;
        let (organization, _admin, cook) =
            test.kitchen().insert_kitchen("Cozinha Central").await?;
        sign_in(&test, cook.id).await;

        let resp = get_organization(State(app_state(&test)), test.session.clone())
            .await
            .unwrap()
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: OrganizationIdDto = json_body(resp).await;
        assert_eq!(body.organization_id, organization.id);

        Ok(())
    }
}
