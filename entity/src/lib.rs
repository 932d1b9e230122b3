pub mod prelude;

pub mod food_label;
pub mod label_template;
pub mod organization;
pub mod product;
pub mod profile;
pub mod sea_orm_active_enums;
