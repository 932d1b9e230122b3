//! Cook account management for organization admins.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ProfileRole;
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use uuid::Uuid;

use crate::{
    model::{
        user::{CookDto, CreateCookDto},
        validation::validate_cook,
    },
    server::{
        data::profile::ProfileRepository,
        error::{resource::ResourceError, Error},
        service::auth::pin::hash_pin,
    },
};

/// Reports a unique violation on insert as [`ResourceError::UsernameTaken`].
///
/// Covers a profile with the same username being created between the lookup and the insert.
pub(super) fn username_conflict(err: DbErr, username: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ResourceError::UsernameTaken(username.to_string()).into()
        }
        _ => err.into(),
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the cooks of an organization by username
    pub async fn get_cooks(&self, organization_id: Uuid) -> Result<Vec<CookDto>, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        let cooks = profile_repo
            .get_cooks(organization_id)
            .await?
            .into_iter()
            .map(CookDto::from)
            .collect();

        Ok(cooks)
    }

    /// Creates a cook account in the organization.
    ///
    /// # Returns
    /// - `Ok(CookDto)` - The created cook
    /// - `Err(Error::ValidationError)` - Blank username or a PIN that is not 4 digits
    /// - `Err(Error::ResourceError(ResourceError::UsernameTaken))` - Username already used by
    ///   any profile, in any organization
    pub async fn create_cook(
        &self,
        organization_id: Uuid,
        cook: CreateCookDto,
        now: NaiveDateTime,
    ) -> Result<CookDto, Error> {
        validate_cook(&cook)?;

        let username = cook.username.trim();
        let profile_repo = ProfileRepository::new(self.db);

        if profile_repo.find_by_username(username).await?.is_some() {
            return Err(ResourceError::UsernameTaken(username.to_string()).into());
        }

        let pin_hash = hash_pin(cook.pin).await?;
        let created = profile_repo
            .create(
                organization_id,
                username,
                ProfileRole::Cook,
                Some(pin_hash),
                now,
            )
            .await
            .map_err(|err| username_conflict(err, username))?;

        Ok(created.into())
    }

    /// Suggests a random PIN for a new cook, between `1000` and `9999`
    pub fn generate_pin() -> String {
        rand::rng().random_range(1000..=9999).to_string()
    }
}
