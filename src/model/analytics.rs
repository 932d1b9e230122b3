//! Label analytics shown on the dashboard.
//!
//! Everything here is a single pass over the organization's labels; nothing is stored.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    label::{ExpirationBucket, FoodLabelDto, LabelStatus},
    product::ProductDto,
};

/// Department of labels whose product is not in the catalog
pub const FALLBACK_DEPARTMENT: &str = "Geral";
/// Number of products listed in the production trends
pub const TOP_PRODUCTS_LIMIT: usize = 10;
/// Number of days covered by the daily production chart, today included
pub const DAILY_PRODUCTION_DAYS: i64 = 7;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LabelStatsDto {
    pub total: usize,
    pub active: usize,
    pub used: usize,
    pub discarded: usize,
    /// Active labels only
    pub expired: usize,
    /// Active labels only
    pub expiring_today: usize,
    /// Active labels only
    pub expiring_soon: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StatusSliceDto {
    pub status: LabelStatus,
    pub value: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DepartmentStatsDto {
    pub name: String,
    pub count: usize,
    pub active: usize,
    pub discarded: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DailyProductionDto {
    /// Day formatted as `dd/MM`
    pub date: String,
    pub count: usize,
    pub active: usize,
    pub used: usize,
    pub discarded: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProductionTrendDto {
    pub product: String,
    pub total: usize,
    pub active: usize,
    pub discarded: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LabelAnalyticsDto {
    pub stats: LabelStatsDto,
    /// Status slices for the pie chart, zero-valued slices omitted
    pub status_distribution: Vec<StatusSliceDto>,
    pub department_stats: Vec<DepartmentStatsDto>,
    /// Oldest day first
    pub daily_production: Vec<DailyProductionDto>,
    pub production_trends: Vec<ProductionTrendDto>,
    /// Percentage of discarded labels, 0 when there are no labels
    pub waste_rate: f64,
    /// Percentage of used labels, 0 when there are no labels
    pub utilization_rate: f64,
}

/// Resolves the department of a label through the product catalog.
///
/// Labels linked to a product use that product's department, otherwise the product name is
/// looked up ignoring case, otherwise the label falls under [`FALLBACK_DEPARTMENT`].
pub struct DepartmentLookup<'a> {
    by_id: HashMap<Uuid, &'a str>,
    by_name: HashMap<String, &'a str>,
}

impl<'a> DepartmentLookup<'a> {
    pub fn new(products: &'a [ProductDto]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_name = HashMap::with_capacity(products.len());

        for product in products {
            by_id.insert(product.id, product.department.as_str());
            by_name
                .entry(product.name.to_lowercase())
                .or_insert(product.department.as_str());
        }

        Self { by_id, by_name }
    }

    pub fn resolve(&self, label: &FoodLabelDto) -> &'a str {
        label
            .product_id
            .and_then(|id| self.by_id.get(&id).copied())
            .or_else(|| {
                self.by_name
                    .get(&label.product_name.to_lowercase())
                    .copied()
            })
            .unwrap_or(FALLBACK_DEPARTMENT)
    }
}

#[derive(Default)]
struct StatusCounts {
    total: usize,
    active: usize,
    used: usize,
    discarded: usize,
}

impl StatusCounts {
    fn record(&mut self, status: LabelStatus) {
        self.total += 1;
        match status {
            LabelStatus::Active => self.active += 1,
            LabelStatus::Used => self.used += 1,
            LabelStatus::Discarded => self.discarded += 1,
        }
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Computes the dashboard analytics of `labels` at `now`.
///
/// # Arguments
/// - `labels` - Every label of the organization, whatever its status
/// - `products` - The organization's product catalog, used to resolve departments
/// - `now` - Current kitchen-local time
pub fn compute_analytics(
    labels: &[FoodLabelDto],
    products: &[ProductDto],
    now: NaiveDateTime,
) -> LabelAnalyticsDto {
    let departments = DepartmentLookup::new(products);
    let today = now.date();

    let days: Vec<NaiveDate> = (0..DAILY_PRODUCTION_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();
    let day_index: HashMap<NaiveDate, usize> =
        days.iter().enumerate().map(|(i, day)| (*day, i)).collect();

    let mut totals = StatusCounts::default();
    let mut stats = LabelStatsDto::default();
    let mut by_department: HashMap<&str, StatusCounts> = HashMap::new();
    let mut by_product: HashMap<&str, StatusCounts> = HashMap::new();
    let mut by_day: Vec<StatusCounts> = days.iter().map(|_| StatusCounts::default()).collect();

    for label in labels {
        totals.record(label.status);

        if label.is_active() {
            match label.bucket(now) {
                ExpirationBucket::Expired => stats.expired += 1,
                ExpirationBucket::Today => stats.expiring_today += 1,
                ExpirationBucket::Soon => stats.expiring_soon += 1,
                ExpirationBucket::Valid => (),
            }
        }

        by_department
            .entry(departments.resolve(label))
            .or_default()
            .record(label.status);

        by_product
            .entry(label.product_name.as_str())
            .or_default()
            .record(label.status);

        if let Some(&i) = day_index.get(&label.created_at.date()) {
            by_day[i].record(label.status);
        }
    }

    stats.total = totals.total;
    stats.active = totals.active;
    stats.used = totals.used;
    stats.discarded = totals.discarded;

    let status_distribution = [
        (LabelStatus::Active, stats.active),
        (LabelStatus::Used, stats.used),
        (LabelStatus::Discarded, stats.discarded),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(status, value)| StatusSliceDto { status, value })
    .collect();

    let mut department_stats: Vec<DepartmentStatsDto> = by_department
        .into_iter()
        .map(|(name, counts)| DepartmentStatsDto {
            name: name.to_string(),
            count: counts.total,
            active: counts.active,
            discarded: counts.discarded,
        })
        .collect();
    department_stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    let daily_production = days
        .iter()
        .zip(by_day)
        .map(|(day, counts)| DailyProductionDto {
            date: day.format("%d/%m").to_string(),
            count: counts.total,
            active: counts.active,
            used: counts.used,
            discarded: counts.discarded,
        })
        .collect();

    let mut production_trends: Vec<ProductionTrendDto> = by_product
        .into_iter()
        .map(|(product, counts)| ProductionTrendDto {
            product: product.to_string(),
            total: counts.total,
            active: counts.active,
            discarded: counts.discarded,
        })
        .collect();
    production_trends
        .sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.product.cmp(&b.product)));
    production_trends.truncate(TOP_PRODUCTS_LIMIT);

    LabelAnalyticsDto {
        waste_rate: percentage(stats.discarded, stats.total),
        utilization_rate: percentage(stats.used, stats.total),
        stats,
        status_distribution,
        department_stats,
        daily_production,
        production_trends,
    }
}
