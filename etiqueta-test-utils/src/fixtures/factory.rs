//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::LabelStatus;
use uuid::Uuid;

/// Fixed kitchen-local timestamp on 2026-10-18, used as "now" across tests
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// Default "now" of tests: 2026-10-18 10:00
pub fn test_now() -> NaiveDateTime {
    at(18, 10, 0)
}

pub fn mock_label_model(
    organization_id: Uuid,
    product_name: &str,
    expiration_date: NaiveDateTime,
    status: LabelStatus,
) -> entity::food_label::Model {
    let production = at(15, 8, 0);

    entity::food_label::Model {
        id: Uuid::new_v4(),
        product_name: product_name.to_string(),
        product_id: None,
        production_date: production,
        expiration_date,
        quantity: "1 kg".to_string(),
        responsible: None,
        observations: None,
        status,
        organization_id,
        created_at: production,
    }
}

/// Custom template model with the dimensions of the built-in `standard` template
pub fn mock_template_model(organization_id: Uuid) -> entity::label_template::Model {
    entity::label_template::Model {
        id: Uuid::new_v4(),
        name: "Potes".to_string(),
        width_mm: 70,
        height_mm: 40,
        product_font_size: 16,
        details_font_size: 12,
        small_font_size: 10,
        show_qr: true,
        qr_size: 64,
        layout: "standard".to_string(),
        background_color: "#ffffff".to_string(),
        text_color: "#000000".to_string(),
        accent_color: "#f59e0b".to_string(),
        organization_id,
        created_at: Utc::now().naive_utc(),
    }
}
