//! Food labels and their expiration rules.
//!
//! Label timestamps are kitchen-local wall clock times, as entered in the label form.
//! Classification always compares them against a caller-provided "now" in the same clock,
//! which keeps every rule here deterministic and testable.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LabelStatus {
    Active,
    Used,
    Discarded,
}

impl LabelStatus {
    /// Labels only leave the `Active` state, `Used` and `Discarded` are terminal.
    pub fn can_transition_to(self, next: LabelStatus) -> bool {
        matches!(
            (self, next),
            (LabelStatus::Active, LabelStatus::Used) | (LabelStatus::Active, LabelStatus::Discarded)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelStatus::Active => "active",
            LabelStatus::Used => "used",
            LabelStatus::Discarded => "discarded",
        }
    }
}

/// Urgency of a label's expiration relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExpirationBucket {
    /// Expired before today's midnight
    Expired,
    /// Expires at some point today
    Today,
    /// Expires tomorrow, within 48 hours of today's midnight
    Soon,
    Valid,
}

impl ExpirationBucket {
    /// Classifies an expiration timestamp against the local midnight of `now`.
    ///
    /// All ranges are half-open: `[today, tomorrow)` is `Today` and
    /// `[tomorrow, today + 48h)` is `Soon`.
    ///
    /// # Example
    /// ```ignore
    /// // now = 2026-10-18 15:00
    /// classify(2026-10-18 00:00, now) == ExpirationBucket::Today
    /// classify(2026-10-19 23:59, now) == ExpirationBucket::Soon
    /// classify(2026-10-20 00:00, now) == ExpirationBucket::Valid
    /// ```
    pub fn classify(expiration: NaiveDateTime, now: NaiveDateTime) -> Self {
        let today = now.date().and_time(NaiveTime::MIN);
        let tomorrow = today + Duration::days(1);
        let day_after_tomorrow = today + Duration::days(2);

        if expiration < today {
            ExpirationBucket::Expired
        } else if expiration < tomorrow {
            ExpirationBucket::Today
        } else if expiration < day_after_tomorrow {
            ExpirationBucket::Soon
        } else {
            ExpirationBucket::Valid
        }
    }

    /// Badge text shown next to a label
    pub fn badge(&self) -> &'static str {
        match self {
            ExpirationBucket::Expired => "Expired",
            ExpirationBucket::Today => "Expires today",
            ExpirationBucket::Soon => "Expires within 48h",
            ExpirationBucket::Valid => "Valid",
        }
    }
}

/// Computes the expiration of a label produced at `production` for a product that
/// stays good for `validity_days` days.
pub fn default_expiration(production: NaiveDateTime, validity_days: i32) -> NaiveDateTime {
    production + Duration::days(i64::from(validity_days))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FoodLabelDto {
    pub id: Uuid,
    pub product_name: String,
    pub product_id: Option<Uuid>,
    pub production_date: NaiveDateTime,
    pub expiration_date: NaiveDateTime,
    pub quantity: String,
    pub responsible: Option<String>,
    pub observations: Option<String>,
    pub status: LabelStatus,
    pub created_at: NaiveDateTime,
}

impl FoodLabelDto {
    pub fn bucket(&self, now: NaiveDateTime) -> ExpirationBucket {
        ExpirationBucket::classify(self.expiration_date, now)
    }

    pub fn is_active(&self) -> bool {
        self.status == LabelStatus::Active
    }
}

/// Body of a label creation request.
///
/// `production_date` defaults to now and `expiration_date` defaults to the production date
/// plus the selected product's default validity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateLabelDto {
    pub product_name: String,
    #[serde(default)]
    pub product_id: Option<Uuid>,
    #[serde(default)]
    pub production_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDateTime>,
    pub quantity: String,
    #[serde(default)]
    pub responsible: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateLabelStatusDto {
    pub status: LabelStatus,
}

/// Bucket filter applied to the active label list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum LabelFilter {
    #[default]
    All,
    Expired,
    Today,
    Soon,
}

impl LabelFilter {
    pub fn matches(&self, bucket: ExpirationBucket) -> bool {
        match self {
            LabelFilter::All => true,
            LabelFilter::Expired => bucket == ExpirationBucket::Expired,
            LabelFilter::Today => bucket == ExpirationBucket::Today,
            LabelFilter::Soon => bucket == ExpirationBucket::Soon,
        }
    }
}

/// Query parameters of the label list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
pub struct LabelQuery {
    #[serde(default)]
    pub filter: Option<LabelFilter>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Returns the active labels matching `filter` and `search`, most urgent first.
///
/// The search term matches any part of the product name, ignoring case. An empty or
/// whitespace-only term matches everything.
pub fn filter_active_labels(
    labels: &[FoodLabelDto],
    filter: LabelFilter,
    search: Option<&str>,
    now: NaiveDateTime,
) -> Vec<FoodLabelDto> {
    let term = search
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty());

    let mut filtered: Vec<FoodLabelDto> = labels
        .iter()
        .filter(|label| label.is_active())
        .filter(|label| match &term {
            Some(term) => label.product_name.to_lowercase().contains(term),
            None => true,
        })
        .filter(|label| filter.matches(label.bucket(now)))
        .cloned()
        .collect();

    filtered.sort_by_key(|label| label.expiration_date);

    filtered
}

/// Active labels grouped under one urgency bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ExpirationAlertDto {
    #[serde(rename = "type")]
    pub kind: ExpirationBucket,
    pub count: usize,
    pub items: Vec<FoodLabelDto>,
}

/// Groups active labels into the expired, today, and soon alerts, in that order.
///
/// All three alerts are always returned, including empty ones.
pub fn expiration_alerts(labels: &[FoodLabelDto], now: NaiveDateTime) -> Vec<ExpirationAlertDto> {
    [
        ExpirationBucket::Expired,
        ExpirationBucket::Today,
        ExpirationBucket::Soon,
    ]
    .into_iter()
    .map(|kind| {
        let items: Vec<FoodLabelDto> = labels
            .iter()
            .filter(|label| label.is_active() && label.bucket(now) == kind)
            .cloned()
            .collect();

        ExpirationAlertDto {
            kind,
            count: items.len(),
            items,
        }
    })
    .collect()
}
