//! PIN authentication service.
//!
//! Kitchen staff sign in with their username and a 4-digit PIN. A successful sign-in
//! yields the profile's identity, role and organization, which the controller stores in the
//! session.

pub mod pin;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::{
        user::{PinLoginDto, UserDto},
        validation::validate_login,
    },
    server::{
        data::profile::ProfileRepository,
        error::{auth::AuthError, Error},
        service::auth::pin::verify_pin,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates a profile by username and PIN.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials match a profile with a PIN
    /// - `Err(Error::ValidationError)` - Username or PIN is blank
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username, profile
    ///   without a PIN, or wrong PIN; the three are indistinguishable to the caller
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn authenticate_with_pin(&self, login: &PinLoginDto) -> Result<UserDto, Error> {
        validate_login(login)?;

        let profile_repo = ProfileRepository::new(self.db);

        let Some(profile) = profile_repo.find_by_username(login.username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        let Some(pin_hash) = profile.pin_hash.clone() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_pin(login.pin.clone(), pin_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(UserDto {
            id: profile.id,
            username: profile.username,
            role: profile.role.into(),
            organization_id: profile.organization_id,
        })
    }

    /// Retrieves the profile of a signed-in user
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Profile found
    /// - `Ok(None)` - Profile no longer exists
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<UserDto>, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        Ok(profile_repo.get(user_id).await?.map(|profile| UserDto {
            id: profile.id,
            username: profile.username,
            role: profile.role.into(),
            organization_id: profile.organization_id,
        }))
    }

    /// Organization id of a signed-in user, `None` if the profile no longer exists
    pub async fn current_organization(&self, user_id: Uuid) -> Result<Option<Uuid>, Error> {
        Ok(self.get_user(user_id).await?.map(|user| user.organization_id))
    }
}
