use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

/// Retrieves the signed-in profile from session and then from database
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: Profile found, with its role and organization
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID in session but the profile
///   no longer exists (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = AuthService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Same as [`get_user_from_session`], but fails with `AuthError::AdminRequired` for cooks
pub async fn get_admin_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_admin() {
        return Err(Error::AuthError(AuthError::AdminRequired(user.id)));
    }

    Ok(user)
}
