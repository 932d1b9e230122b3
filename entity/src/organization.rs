use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::food_label::Entity")]
    FoodLabel,
    #[sea_orm(has_many = "super::label_template::Entity")]
    LabelTemplate,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::food_label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodLabel.def()
    }
}

impl Related<super::label_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabelTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
