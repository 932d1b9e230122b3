use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{LabelStatus, ProfileRole};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn kitchen<'a>(&'a mut self) -> KitchenFixtures<'a> {
        KitchenFixtures { setup: self }
    }
}

pub struct KitchenFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Hashes a fixture PIN with the cheapest argon2 parameters.
///
/// Verification reads the parameters from the PHC string, so these hashes verify the same
/// way production hashes do.
pub fn hash_fixture_pin(pin: &str) -> Result<String, TestError> {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
        .map_err(|e| TestError::PinHashError(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PinHashError(e.to_string()))
}

impl<'a> KitchenFixtures<'a> {
    pub async fn insert_organization(
        &self,
        name: &str,
    ) -> Result<entity::organization::Model, TestError> {
        Ok(
            entity::prelude::Organization::insert(entity::organization::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a profile, hashing `pin` when provided
    pub async fn insert_profile(
        &self,
        organization_id: Uuid,
        username: &str,
        role: ProfileRole,
        pin: Option<&str>,
    ) -> Result<entity::profile::Model, TestError> {
        let pin_hash = pin.map(hash_fixture_pin).transpose()?;

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                username: ActiveValue::Set(username.to_string()),
                role: ActiveValue::Set(role),
                pin_hash: ActiveValue::Set(pin_hash),
                organization_id: ActiveValue::Set(organization_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_product(
        &self,
        organization_id: Uuid,
        name: &str,
        default_validity_days: i32,
        department: &str,
    ) -> Result<entity::product::Model, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.to_string()),
                default_validity_days: ActiveValue::Set(default_validity_days),
                department: ActiveValue::Set(department.to_string()),
                organization_id: ActiveValue::Set(organization_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a label produced at `production_date` and created at the same time
    pub async fn insert_label(
        &self,
        organization_id: Uuid,
        product_name: &str,
        production_date: NaiveDateTime,
        expiration_date: NaiveDateTime,
        status: LabelStatus,
    ) -> Result<entity::food_label::Model, TestError> {
        Ok(
            entity::prelude::FoodLabel::insert(entity::food_label::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                product_name: ActiveValue::Set(product_name.to_string()),
                product_id: ActiveValue::Set(None),
                production_date: ActiveValue::Set(production_date),
                expiration_date: ActiveValue::Set(expiration_date),
                quantity: ActiveValue::Set("1 kg".to_string()),
                responsible: ActiveValue::Set(None),
                observations: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                organization_id: ActiveValue::Set(organization_id),
                created_at: ActiveValue::Set(production_date),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_template(
        &self,
        organization_id: Uuid,
        name: &str,
    ) -> Result<entity::label_template::Model, TestError> {
        let mut model = crate::fixtures::factory::mock_template_model(organization_id);
        model.name = name.to_string();

        Ok(
            entity::prelude::LabelTemplate::insert(
                entity::label_template::ActiveModel::from(model).reset_all(),
            )
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts an organization with an admin and a cook, both using PIN `1234`
    pub async fn insert_kitchen(
        &mut self,
        name: &str,
    ) -> Result<
        (
            entity::organization::Model,
            entity::profile::Model,
            entity::profile::Model,
        ),
        TestError,
    > {
        let organization = self.insert_organization(name).await?;
        let slug = name.to_lowercase().replace(' ', "_");

        let admin = self
            .insert_profile(
                organization.id,
                &format!("{}_admin", slug),
                ProfileRole::Admin,
                Some("1234"),
            )
            .await?;
        let cook = self
            .insert_profile(
                organization.id,
                &format!("{}_cook", slug),
                ProfileRole::Cook,
                Some("1234"),
            )
            .await?;

        Ok((organization, admin, cook))
    }
}
