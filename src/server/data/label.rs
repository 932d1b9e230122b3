use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::LabelStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Values of a label about to be stored, with its timestamps already resolved
pub struct NewLabel {
    pub product_name: String,
    pub product_id: Option<Uuid>,
    pub production_date: NaiveDateTime,
    pub expiration_date: NaiveDateTime,
    pub quantity: String,
    pub responsible: Option<String>,
    pub observations: Option<String>,
}

pub struct LabelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LabelRepository<'a, C> {
    /// Creates a new instance of [`LabelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a new label in the `active` state
    pub async fn create(
        &self,
        organization_id: Uuid,
        label: NewLabel,
        created_at: NaiveDateTime,
    ) -> Result<entity::food_label::Model, DbErr> {
        entity::prelude::FoodLabel::insert(entity::food_label::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            product_name: ActiveValue::Set(label.product_name),
            product_id: ActiveValue::Set(label.product_id),
            production_date: ActiveValue::Set(label.production_date),
            expiration_date: ActiveValue::Set(label.expiration_date),
            quantity: ActiveValue::Set(label.quantity),
            responsible: ActiveValue::Set(label.responsible),
            observations: ActiveValue::Set(label.observations),
            status: ActiveValue::Set(LabelStatus::Active),
            organization_id: ActiveValue::Set(organization_id),
            created_at: ActiveValue::Set(created_at),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Every label of the organization regardless of status, newest first
    pub async fn get_all(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::food_label::Model>, DbErr> {
        entity::prelude::FoodLabel::find()
            .filter(entity::food_label::Column::OrganizationId.eq(organization_id))
            .order_by_desc(entity::food_label::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Active labels of the organization sorted by expiration
    pub async fn get_active(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::food_label::Model>, DbErr> {
        entity::prelude::FoodLabel::find()
            .filter(entity::food_label::Column::OrganizationId.eq(organization_id))
            .filter(entity::food_label::Column::Status.eq(LabelStatus::Active))
            .order_by_asc(entity::food_label::Column::ExpirationDate)
            .all(self.db)
            .await
    }

    pub async fn get(
        &self,
        organization_id: Uuid,
        label_id: Uuid,
    ) -> Result<Option<entity::food_label::Model>, DbErr> {
        entity::prelude::FoodLabel::find_by_id(label_id)
            .filter(entity::food_label::Column::OrganizationId.eq(organization_id))
            .one(self.db)
            .await
    }

    /// Labels of the organization among `label_ids`; ids of other organizations are skipped
    pub async fn get_many(
        &self,
        organization_id: Uuid,
        label_ids: &[Uuid],
    ) -> Result<Vec<entity::food_label::Model>, DbErr> {
        if label_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::FoodLabel::find()
            .filter(entity::food_label::Column::OrganizationId.eq(organization_id))
            .filter(entity::food_label::Column::Id.is_in(label_ids.iter().copied()))
            .order_by_asc(entity::food_label::Column::ExpirationDate)
            .all(self.db)
            .await
    }

    /// Moves a label from status `from` to status `to` in a single conditional write
    ///
    /// Returns `None` when no label of the organization with that ID currently has status
    /// `from`, either because it does not exist or because its status changed in between.
    pub async fn update_status(
        &self,
        organization_id: Uuid,
        label_id: Uuid,
        from: LabelStatus,
        to: LabelStatus,
    ) -> Result<Option<entity::food_label::Model>, DbErr> {
        let result = entity::prelude::FoodLabel::update_many()
            .set(entity::food_label::ActiveModel {
                status: ActiveValue::Set(to),
                ..Default::default()
            })
            .filter(entity::food_label::Column::Id.eq(label_id))
            .filter(entity::food_label::Column::OrganizationId.eq(organization_id))
            .filter(entity::food_label::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get(organization_id, label_id).await
    }
}
