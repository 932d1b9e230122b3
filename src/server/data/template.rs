use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::template::SaveTemplateDto;

pub struct TemplateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn apply(am: &mut entity::label_template::ActiveModel, template: SaveTemplateDto) {
    am.name = ActiveValue::Set(template.name.trim().to_string());
    am.width_mm = ActiveValue::Set(template.width);
    am.height_mm = ActiveValue::Set(template.height);
    am.product_font_size = ActiveValue::Set(template.font_size.product);
    am.details_font_size = ActiveValue::Set(template.font_size.details);
    am.small_font_size = ActiveValue::Set(template.font_size.small);
    am.show_qr = ActiveValue::Set(template.show_qr);
    am.qr_size = ActiveValue::Set(template.qr_size);
    am.layout = ActiveValue::Set(template.layout.as_str().to_string());
    am.background_color = ActiveValue::Set(template.colors.background);
    am.text_color = ActiveValue::Set(template.colors.text);
    am.accent_color = ActiveValue::Set(template.colors.accent);
}

impl<'a, C: ConnectionTrait> TemplateRepository<'a, C> {
    /// Creates a new instance of [`TemplateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organization_id: Uuid,
        template: SaveTemplateDto,
        created_at: NaiveDateTime,
    ) -> Result<entity::label_template::Model, DbErr> {
        let mut am = entity::label_template::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            organization_id: ActiveValue::Set(organization_id),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };
        apply(&mut am, template);

        am.insert(self.db).await
    }

    /// Custom templates of the organization, oldest first
    pub async fn get_all(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::label_template::Model>, DbErr> {
        entity::prelude::LabelTemplate::find()
            .filter(entity::label_template::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::label_template::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get(
        &self,
        organization_id: Uuid,
        template_id: Uuid,
    ) -> Result<Option<entity::label_template::Model>, DbErr> {
        entity::prelude::LabelTemplate::find_by_id(template_id)
            .filter(entity::label_template::Column::OrganizationId.eq(organization_id))
            .one(self.db)
            .await
    }

    /// Replaces every editable field of a template
    ///
    /// Returns `None` when the template does not exist within the organization.
    pub async fn update(
        &self,
        organization_id: Uuid,
        template_id: Uuid,
        template: SaveTemplateDto,
    ) -> Result<Option<entity::label_template::Model>, DbErr> {
        let Some(existing) = self.get(organization_id, template_id).await? else {
            return Ok(None);
        };

        let mut am = existing.into_active_model();
        apply(&mut am, template);

        let updated = am.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a template of the organization
    ///
    /// Returns OK regardless of the template existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(
        &self,
        organization_id: Uuid,
        template_id: Uuid,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::LabelTemplate::delete_many()
            .filter(entity::label_template::Column::Id.eq(template_id))
            .filter(entity::label_template::Column::OrganizationId.eq(organization_id))
            .exec(self.db)
            .await
    }
}
