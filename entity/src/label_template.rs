use sea_orm::entity::prelude::*;

/// A custom label layout owned by an organization.
///
/// Built-in templates are not stored, see `etiqueta::model::template`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "label_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub width_mm: i32,
    pub height_mm: i32,
    pub product_font_size: i32,
    pub details_font_size: i32,
    pub small_font_size: i32,
    pub show_qr: bool,
    pub qr_size: i32,
    pub layout: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub organization_id: Uuid,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
