//! Database model type aliases and their conversions into API DTOs.
//!
//! The `entity` crate mirrors the shared enums (`LabelStatus`, `ProfileRole`) as sea-orm
//! active enums; the conversions below are the only place the two are mapped.

use crate::model::{
    label::{FoodLabelDto, LabelStatus},
    product::ProductDto,
    template::{FontSizesDto, LabelTemplateDto, TemplateColorsDto, TemplateLayout},
    user::{CookDto, ProfileRole},
};

/// Tenant boundary; every other row belongs to one organization.
pub type OrganizationModel = entity::organization::Model;

/// Admin or cook account.
///
/// # Fields (from `entity::profile::Model`)
/// - `username` - Unique across all organizations
/// - `pin_hash` - Argon2 PHC string, `None` for profiles that cannot sign in with a PIN
pub type ProfileModel = entity::profile::Model;

/// Catalog product with its default validity in days.
pub type ProductModel = entity::product::Model;

/// Printed food label.
pub type FoodLabelModel = entity::food_label::Model;

/// Custom label template of an organization.
pub type LabelTemplateModel = entity::label_template::Model;

impl From<entity::sea_orm_active_enums::LabelStatus> for LabelStatus {
    fn from(status: entity::sea_orm_active_enums::LabelStatus) -> Self {
        use entity::sea_orm_active_enums::LabelStatus as Db;

        match status {
            Db::Active => LabelStatus::Active,
            Db::Used => LabelStatus::Used,
            Db::Discarded => LabelStatus::Discarded,
        }
    }
}

impl From<LabelStatus> for entity::sea_orm_active_enums::LabelStatus {
    fn from(status: LabelStatus) -> Self {
        match status {
            LabelStatus::Active => Self::Active,
            LabelStatus::Used => Self::Used,
            LabelStatus::Discarded => Self::Discarded,
        }
    }
}

impl From<entity::sea_orm_active_enums::ProfileRole> for ProfileRole {
    fn from(role: entity::sea_orm_active_enums::ProfileRole) -> Self {
        use entity::sea_orm_active_enums::ProfileRole as Db;

        match role {
            Db::Admin => ProfileRole::Admin,
            Db::Cook => ProfileRole::Cook,
        }
    }
}

impl From<ProfileRole> for entity::sea_orm_active_enums::ProfileRole {
    fn from(role: ProfileRole) -> Self {
        match role {
            ProfileRole::Admin => Self::Admin,
            ProfileRole::Cook => Self::Cook,
        }
    }
}

impl From<FoodLabelModel> for FoodLabelDto {
    fn from(label: FoodLabelModel) -> Self {
        Self {
            id: label.id,
            product_name: label.product_name,
            product_id: label.product_id,
            production_date: label.production_date,
            expiration_date: label.expiration_date,
            quantity: label.quantity,
            responsible: label.responsible,
            observations: label.observations,
            status: label.status.into(),
            created_at: label.created_at,
        }
    }
}

impl From<ProductModel> for ProductDto {
    fn from(product: ProductModel) -> Self {
        Self {
            id: product.id,
            name: product.name,
            default_validity_days: product.default_validity_days,
            department: product.department,
            created_at: product.created_at,
        }
    }
}

impl From<ProfileModel> for CookDto {
    fn from(profile: ProfileModel) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            role: profile.role.into(),
            created_at: profile.created_at,
        }
    }
}

impl From<LabelTemplateModel> for LabelTemplateDto {
    fn from(template: LabelTemplateModel) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name,
            width: template.width_mm,
            height: template.height_mm,
            font_size: FontSizesDto {
                product: template.product_font_size,
                details: template.details_font_size,
                small: template.small_font_size,
            },
            show_qr: template.show_qr,
            qr_size: template.qr_size,
            // Layouts are written from `TemplateLayout::as_str`
            layout: TemplateLayout::parse(&template.layout).unwrap_or(TemplateLayout::Standard),
            colors: TemplateColorsDto {
                background: template.background_color,
                text: template.text_color,
                accent: template.accent_color,
            },
            built_in: false,
            created_at: Some(template.created_at),
        }
    }
}
