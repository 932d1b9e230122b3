//! Payload encoded into a label's QR code.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::label::{CreateLabelDto, FoodLabelDto};

const QR_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QrPayload {
    pub id: String,
    pub product: String,
    pub production: String,
    pub expiration: String,
    pub quantity: String,
    pub responsible: String,
    pub observations: String,
    pub created: String,
}

fn qr_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(QR_TIMESTAMP_FORMAT).to_string()
}

impl QrPayload {
    pub fn from_label(label: &FoodLabelDto) -> Self {
        Self {
            id: label.id.to_string(),
            product: label.product_name.clone(),
            production: qr_timestamp(label.production_date),
            expiration: qr_timestamp(label.expiration_date),
            quantity: label.quantity.clone(),
            responsible: label.responsible.clone().unwrap_or_default(),
            observations: label.observations.clone().unwrap_or_default(),
            created: qr_timestamp(label.created_at),
        }
    }

    /// Payload previewed for a label that has not been saved yet.
    ///
    /// The id is `temp_` followed by the milliseconds of `now`; production defaults to `now`.
    pub fn from_draft(draft: &CreateLabelDto, now: NaiveDateTime) -> Self {
        let production = draft.production_date.unwrap_or(now);

        Self {
            id: format!("temp_{}", now.and_utc().timestamp_millis()),
            product: draft.product_name.clone(),
            production: qr_timestamp(production),
            expiration: draft.expiration_date.map(qr_timestamp).unwrap_or_default(),
            quantity: draft.quantity.clone(),
            responsible: draft.responsible.clone().unwrap_or_default(),
            observations: draft.observations.clone().unwrap_or_default(),
            created: qr_timestamp(now),
        }
    }

    /// JSON text placed in the QR code
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
