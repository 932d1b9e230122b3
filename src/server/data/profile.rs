use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ProfileRole;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile with an already hashed PIN
    pub async fn create(
        &self,
        organization_id: Uuid,
        username: &str,
        role: ProfileRole,
        pin_hash: Option<String>,
        created_at: NaiveDateTime,
    ) -> Result<entity::profile::Model, DbErr> {
        entity::prelude::Profile::insert(entity::profile::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(username.to_string()),
            role: ActiveValue::Set(role),
            pin_hash: ActiveValue::Set(pin_hash),
            organization_id: ActiveValue::Set(organization_id),
            created_at: ActiveValue::Set(created_at),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, profile_id: Uuid) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    /// Usernames are unique across organizations, so no organization filter applies here
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists the cooks of an organization by username
    pub async fn get_cooks(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::OrganizationId.eq(organization_id))
            .filter(entity::profile::Column::Role.eq(ProfileRole::Cook))
            .order_by_asc(entity::profile::Column::Username)
            .all(self.db)
            .await
    }
}
