use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organization_id: Uuid,
        name: &str,
        default_validity_days: i32,
        department: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::product::Model, DbErr> {
        entity::prelude::Product::insert(entity::product::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            default_validity_days: ActiveValue::Set(default_validity_days),
            department: ActiveValue::Set(department.to_string()),
            organization_id: ActiveValue::Set(organization_id),
            created_at: ActiveValue::Set(created_at),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Inserts several products of the same organization in one statement
    ///
    /// Products are `(name, default validity in days, department)` tuples.
    pub async fn create_many(
        &self,
        organization_id: Uuid,
        products: &[(&str, i32, &str)],
        created_at: NaiveDateTime,
    ) -> Result<(), DbErr> {
        if products.is_empty() {
            return Ok(());
        }

        let models = products
            .iter()
            .map(|(name, validity, department)| entity::product::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.to_string()),
                default_validity_days: ActiveValue::Set(*validity),
                department: ActiveValue::Set(department.to_string()),
                organization_id: ActiveValue::Set(organization_id),
                created_at: ActiveValue::Set(created_at),
            });

        entity::prelude::Product::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists the organization's catalog sorted by name
    pub async fn get_all(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get(
        &self,
        organization_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .filter(entity::product::Column::OrganizationId.eq(organization_id))
            .one(self.db)
            .await
    }

    pub async fn count(&self, organization_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::OrganizationId.eq(organization_id))
            .count(self.db)
            .await
    }
}
