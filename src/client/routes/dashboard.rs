use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        util::api::{get_alerts, get_analytics},
    },
    model::{
        analytics::LabelAnalyticsDto,
        label::{ExpirationAlertDto, ExpirationBucket},
        print::format_label_timestamp,
    },
};

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                AlertCards {}
                AnalyticsSummary {}
            }
        }
    )
}

fn alert_title(kind: ExpirationBucket) -> &'static str {
    match kind {
        ExpirationBucket::Expired => "Expired",
        ExpirationBucket::Today => "Expiring today",
        ExpirationBucket::Soon => "Expiring within 48h",
        ExpirationBucket::Valid => "Valid",
    }
}

#[component]
fn AlertCards() -> Element {
    let alerts = use_resource(|| async move { get_alerts().await });
    let alerts = alerts.read().clone();

    rsx!(
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            match alerts {
                Some(Ok(alerts)) => rsx!(
                    for alert in alerts {
                        AlertCard { key: "{alert.kind:?}", alert: alert.clone() }
                    }
                ),
                Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
                None => rsx!(
                    for _ in 0..3 {
                        div { class: "skeleton h-32 w-full" }
                    }
                ),
            }
        }
    )
}

#[component]
fn AlertCard(alert: ExpirationAlertDto) -> Element {
    let class = match alert.kind {
        ExpirationBucket::Expired => "border-error",
        ExpirationBucket::Today => "border-warning",
        _ => "border-info",
    };

    rsx!(
        div { class: "card shadow-sm border-l-4 {class}",
            div { class: "card-body",
                h2 { class: "card-title", "{alert_title(alert.kind)}" }
                p { class: "text-3xl font-bold", "{alert.count}" }
                ul { class: "text-sm",
                    for label in alert.items.iter().take(5) {
                        li { key: "{label.id}",
                            "{label.product_name} · {format_label_timestamp(label.expiration_date)}"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn AnalyticsSummary() -> Element {
    let analytics = use_resource(|| async move { get_analytics().await });
    let analytics = analytics.read().clone();

    match analytics {
        Some(Ok(analytics)) => rsx!(AnalyticsCards { analytics }),
        Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
        None => rsx!(div { class: "skeleton h-64 w-full" }),
    }
}

#[component]
fn AnalyticsCards(analytics: LabelAnalyticsDto) -> Element {
    let stats = &analytics.stats;

    rsx!(
        div { class: "stats shadow-sm w-full",
            div { class: "stat",
                div { class: "stat-title", "Labels" }
                div { class: "stat-value", "{stats.total}" }
                div { class: "stat-desc", "{stats.active} active" }
            }
            div { class: "stat",
                div { class: "stat-title", "Used" }
                div { class: "stat-value", "{stats.used}" }
                div { class: "stat-desc", "Utilization {analytics.utilization_rate:.1}%" }
            }
            div { class: "stat",
                div { class: "stat-title", "Discarded" }
                div { class: "stat-value", "{stats.discarded}" }
                div { class: "stat-desc", "Waste {analytics.waste_rate:.1}%" }
            }
        }
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
            div { class: "card shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Departments" }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Department" }
                                th { "Labels" }
                                th { "Active" }
                                th { "Discarded" }
                            }
                        }
                        tbody {
                            for department in analytics.department_stats.iter() {
                                tr { key: "{department.name}",
                                    td { "{department.name}" }
                                    td { "{department.count}" }
                                    td { "{department.active}" }
                                    td { "{department.discarded}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "card shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Last 7 days" }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Day" }
                                th { "Produced" }
                                th { "Used" }
                                th { "Discarded" }
                            }
                        }
                        tbody {
                            for day in analytics.daily_production.iter() {
                                tr { key: "{day.date}",
                                    td { "{day.date}" }
                                    td { "{day.count}" }
                                    td { "{day.used}" }
                                    td { "{day.discarded}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "card shadow-sm",
                div { class: "card-body",
                    h2 { class: "card-title", "Top products" }
                    table { class: "table table-sm",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Labels" }
                                th { "Discarded" }
                            }
                        }
                        tbody {
                            for trend in analytics.production_trends.iter() {
                                tr { key: "{trend.product}",
                                    td { "{trend.product}" }
                                    td { "{trend.total}" }
                                    td { "{trend.discarded}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
