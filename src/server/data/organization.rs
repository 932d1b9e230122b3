use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct OrganizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    /// Creates a new instance of [`OrganizationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::organization::Model, DbErr> {
        entity::prelude::Organization::insert(entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(created_at),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        organization_id: Uuid,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find_by_id(organization_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find()
            .filter(entity::organization::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
