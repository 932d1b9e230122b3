//! Startup provisioning of the configured organization.
//!
//! Creates the organization, its admin profile and its default product catalog when they
//! are missing. Existing rows are left untouched, so the admin PIN is only applied on the
//! first run.

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use entity::sea_orm_active_enums::ProfileRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::BootstrapConfig,
    data::{organization::OrganizationRepository, profile::ProfileRepository},
    error::{resource::ResourceError, Error},
    model::db::OrganizationModel,
    service::{auth::pin::hash_pin, product::ProductService, user::username_conflict},
};

pub struct BootstrapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BootstrapService<'a> {
    /// Creates a new instance of [`BootstrapService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ensures the configured organization, admin and catalog exist.
    ///
    /// # Returns
    /// - `Ok(OrganizationModel)` - The existing or created organization
    /// - `Err(Error::ResourceError(ResourceError::UsernameTaken))` - The admin username
    ///   belongs to a profile of another organization
    pub async fn run(
        &self,
        config: &BootstrapConfig,
        now: NaiveDateTime,
    ) -> Result<OrganizationModel, Error> {
        let organization_repo = OrganizationRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        let organization = match organization_repo.find_by_name(&config.organization).await? {
            Some(organization) => organization,
            None => {
                let organization = organization_repo.create(&config.organization, now).await?;

                tracing::info!(
                    organization_id = %organization.id,
                    name = %organization.name,
                    "Created bootstrap organization"
                );

                organization
            }
        };

        match profile_repo.find_by_username(&config.admin_username).await? {
            Some(profile) if profile.organization_id == organization.id => (),
            Some(_) => {
                return Err(ResourceError::UsernameTaken(config.admin_username.clone()).into())
            }
            None => {
                let pin_hash = hash_pin(config.admin_pin.clone()).await?;
                let admin = profile_repo
                    .create(
                        organization.id,
                        &config.admin_username,
                        ProfileRole::Admin,
                        Some(pin_hash),
                        now,
                    )
                    .await
                    .map_err(|err| username_conflict(err, &config.admin_username))?;

                tracing::info!(
                    user_id = %admin.id,
                    username = %admin.username,
                    "Created bootstrap admin"
                );
            }
        }

        ProductService::new(self.db)
            .seed_default_catalog(organization.id, now)
            .await?;

        Ok(organization)
    }
}
