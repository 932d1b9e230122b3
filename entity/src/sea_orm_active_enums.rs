use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LabelStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "used")]
    Used,
    #[sea_orm(string_value = "discarded")]
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ProfileRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "cook")]
    Cook,
}
