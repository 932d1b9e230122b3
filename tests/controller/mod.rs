//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database and a memory-backed session,
//! verifying status codes, session handling and organization scoping for the API endpoints.

mod auth;
mod label;
mod product;
mod template;
mod user;

use axum::{body::to_bytes, response::Response};
use etiqueta::server::model::{app::AppState, session::user::SessionUserId};
use etiqueta_test_utils::TestContext;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Application state over the test database
pub fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}

/// Puts a signed-in user into the test session
pub async fn sign_in(test: &TestContext, user_id: Uuid) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
