use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaPrint, FaTrash};
use dioxus_free_icons::Icon;
use uuid::Uuid;

use crate::{
    client::{
        components::{ExpirationBadge, Page},
        util::{
            api::{
                delete_template, get_labels, get_printers, get_templates, print_labels,
                update_label_status,
            },
            datetime,
        },
    },
    model::{
        label::{filter_active_labels, ExpirationBucket, FoodLabelDto, LabelFilter, LabelStatus},
        print::{format_label_timestamp, PrintJobDto, PrintRequestDto},
        template::{find_template, selection_after_delete, DEFAULT_TEMPLATE_ID},
        validation::validate_print,
    },
};

const FILTERS: [(LabelFilter, &str); 4] = [
    (LabelFilter::All, "All"),
    (LabelFilter::Expired, "Expired"),
    (LabelFilter::Today, "Today"),
    (LabelFilter::Soon, "Within 48h"),
];

#[component]
pub fn Labels() -> Element {
    let mut labels = use_resource(|| async move { get_labels().await });
    let mut filter = use_signal(LabelFilter::default);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(HashSet::<Uuid>::new);
    let mut error = use_signal(|| None::<String>);

    let change_status = move |label_id: Uuid, status: LabelStatus| {
        spawn(async move {
            match update_label_status(label_id, status).await {
                Ok(_) => {
                    selected.write().remove(&label_id);
                    labels.restart();
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let now = datetime::now();
    let visible: Result<Vec<FoodLabelDto>, String> = match &*labels.read() {
        Some(Ok(all)) => Ok(filter_active_labels(all, filter(), Some(&search()), now)),
        Some(Err(err)) => Err(err.clone()),
        None => Ok(Vec::new()),
    };

    rsx!(
        Title { "Labels | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                div { class: "flex flex-wrap gap-2 items-center",
                    div { class: "join",
                        for (value, name) in FILTERS {
                            button {
                                key: "{name}",
                                class: if filter() == value { "btn join-item btn-primary" } else { "btn join-item" },
                                onclick: move |_| filter.set(value),
                                "{name}"
                            }
                        }
                    }
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Search product",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                match visible {
                    Ok(visible) => rsx!(
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th {}
                                        th { "Product" }
                                        th { "Produced" }
                                        th { "Expires" }
                                        th { "Quantity" }
                                        th { "Responsible" }
                                        th { "Status" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for label in visible {
                                        LabelRow {
                                            key: "{label.id}",
                                            bucket: label.bucket(now),
                                            checked: selected.read().contains(&label.id),
                                            on_toggle: move |id: Uuid| {
                                                let mut selected = selected.write();
                                                if !selected.remove(&id) {
                                                    selected.insert(id);
                                                }
                                            },
                                            on_status: move |(id, status): (Uuid, LabelStatus)| change_status(id, status),
                                            label: label.clone(),
                                        }
                                    }
                                }
                            }
                        }
                    ),
                    Err(err) => rsx!(p { class: "text-error", "{err}" }),
                }
                PrintPanel { selected }
            }
        }
    )
}

#[component]
fn LabelRow(
    label: FoodLabelDto,
    bucket: ExpirationBucket,
    checked: bool,
    on_toggle: EventHandler<Uuid>,
    on_status: EventHandler<(Uuid, LabelStatus)>,
) -> Element {
    let id = label.id;

    rsx!(
        tr {
            td {
                input {
                    class: "checkbox",
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| on_toggle.call(id),
                }
            }
            td { "{label.product_name}" }
            td { "{format_label_timestamp(label.production_date)}" }
            td { "{format_label_timestamp(label.expiration_date)}" }
            td { "{label.quantity}" }
            td { {label.responsible.clone().unwrap_or_default()} }
            td { ExpirationBadge { bucket } }
            td { class: "flex gap-2",
                button {
                    class: "btn btn-sm btn-success",
                    title: "Mark as used",
                    onclick: move |_| on_status.call((id, LabelStatus::Used)),
                    Icon { width: 14, height: 14, icon: FaCheck }
                }
                button {
                    class: "btn btn-sm btn-error",
                    title: "Discard",
                    onclick: move |_| on_status.call((id, LabelStatus::Discarded)),
                    Icon { width: 14, height: 14, icon: FaTrash }
                }
            }
        }
    )
}

#[component]
fn PrintPanel(selected: Signal<HashSet<Uuid>>) -> Element {
    let printers = use_resource(|| async move { get_printers().await });
    let mut templates = use_resource(|| async move { get_templates().await });

    let mut printer_id = use_signal(|| "zebra_zt230".to_string());
    let mut template_id = use_signal(|| DEFAULT_TEMPLATE_ID.to_string());
    let mut copies = use_signal(|| 1u32);
    let mut job = use_signal(|| None::<PrintJobDto>);
    let mut error = use_signal(|| None::<String>);

    let print = move |_| {
        let request = PrintRequestDto {
            label_ids: selected.read().iter().copied().collect(),
            printer_id: printer_id(),
            copies: copies(),
            template_id: Some(template_id()),
        };
        if let Err(err) = validate_print(&request) {
            error.set(Some(err.to_string()));
            return;
        }

        spawn(async move {
            match print_labels(&request).await {
                Ok(printed) => {
                    error.set(None);
                    job.set(Some(printed));
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let remove_template = move |_| {
        let deleted = template_id();

        spawn(async move {
            match delete_template(&deleted).await {
                Ok(()) => {
                    let selected = selection_after_delete(&template_id(), &deleted).to_string();
                    template_id.set(selected);
                    templates.restart();
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let printers = printers.read().clone().and_then(Result::ok).unwrap_or_default();
    let templates = templates.read().clone().and_then(Result::ok).unwrap_or_default();
    let custom_selected = find_template(&templates, &template_id()).is_some_and(|t| !t.built_in);

    rsx!(
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Print {selected.read().len()} selected" }
                div { class: "flex flex-wrap gap-2",
                    select {
                        class: "select",
                        value: "{printer_id}",
                        onchange: move |event| printer_id.set(event.value()),
                        for printer in printers {
                            option { key: "{printer.id}", value: "{printer.id}", "{printer.name} ({printer.paper_width_mm}mm)" }
                        }
                    }
                    select {
                        class: "select",
                        value: "{template_id}",
                        onchange: move |event| template_id.set(event.value()),
                        for template in templates {
                            option { key: "{template.id}", value: "{template.id}", "{template.name}" }
                        }
                    }
                    if custom_selected {
                        button { class: "btn btn-ghost", onclick: remove_template,
                            Icon { width: 16, height: 16, icon: FaTrash }
                        }
                    }
                    input {
                        class: "input w-24",
                        r#type: "number",
                        min: 1,
                        max: 10,
                        value: "{copies}",
                        oninput: move |event| copies.set(event.value().parse().unwrap_or(0)),
                    }
                    button { class: "btn btn-primary flex gap-2", onclick: print,
                        Icon { width: 16, height: 16, icon: FaPrint }
                        "Print"
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                if let Some(job) = job() {
                    p { "Sent {job.total} labels to {job.printer.name}" }
                    if let Some(first) = job.commands.first() {
                        pre { class: "text-xs overflow-x-auto bg-base-200 p-2", "{first}" }
                    }
                }
            }
        }
    )
}
