use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        components::Page,
        router::Route,
        util::{
            api::{create_label, get_products},
            datetime,
        },
    },
    model::{
        label::{default_expiration, CreateLabelDto},
        qr::QrPayload,
        validation::validate_label,
    },
};

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn NewLabel() -> Element {
    let navigator = use_navigator();
    let products = use_resource(|| async move { get_products().await });

    let mut product_id = use_signal(|| None::<Uuid>);
    let mut product_name = use_signal(String::new);
    let mut production = use_signal(|| datetime::to_input(datetime::now()));
    let mut expiration = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut responsible = use_signal(String::new);
    let mut observations = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let catalog = products.read().clone().and_then(Result::ok).unwrap_or_default();

    let draft = move || CreateLabelDto {
        product_name: product_name().trim().to_string(),
        product_id: product_id(),
        production_date: datetime::from_input(&production()),
        expiration_date: datetime::from_input(&expiration()),
        quantity: quantity().trim().to_string(),
        responsible: optional(responsible()),
        observations: optional(observations()),
    };

    // Selecting a product fills in its name and derives the expiration date
    let select_catalog = catalog.clone();
    let on_product = move |event: FormEvent| {
        let selected = Uuid::parse_str(&event.value()).ok();
        product_id.set(selected);

        let Some(product) = selected.and_then(|id| select_catalog.iter().find(|p| p.id == id))
        else {
            return;
        };
        product_name.set(product.name.clone());
        if let Some(produced) = datetime::from_input(&production()) {
            expiration.set(datetime::to_input(default_expiration(
                produced,
                product.default_validity_days,
            )));
        }
    };

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let label = draft();
        if let Err(err) = validate_label(&label) {
            error.set(Some(err.to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match create_label(&label).await {
                Ok(_) => {
                    navigator.push(Route::Labels {});
                }
                Err(err) => error.set(Some(err)),
            }
            submitting.set(false);
        });
    };

    let qr_preview = QrPayload::from_draft(&draft(), datetime::now())
        .to_json()
        .unwrap_or_default();

    rsx!(
        Title { "New label | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[960px] p-6 grid grid-cols-1 md:grid-cols-2 gap-4",
                form {
                    class: "card shadow-sm",
                    onsubmit,
                    div { class: "card-body flex flex-col gap-3",
                        h2 { class: "card-title", "New label" }
                        select {
                            class: "select w-full",
                            onchange: on_product,
                            option { value: "", "Pick a product" }
                            for product in catalog {
                                option {
                                    key: "{product.id}",
                                    value: "{product.id}",
                                    "{product.name} ({product.default_validity_days}d · {product.department})"
                                }
                            }
                        }
                        input {
                            class: "input w-full",
                            placeholder: "Product",
                            value: "{product_name}",
                            oninput: move |event| {
                                product_name.set(event.value());
                                product_id.set(None);
                            },
                        }
                        label { class: "text-sm", "Production" }
                        input {
                            class: "input w-full",
                            r#type: "datetime-local",
                            value: "{production}",
                            oninput: move |event| production.set(event.value()),
                        }
                        label { class: "text-sm", "Expiration" }
                        input {
                            class: "input w-full",
                            r#type: "datetime-local",
                            value: "{expiration}",
                            oninput: move |event| expiration.set(event.value()),
                        }
                        input {
                            class: "input w-full",
                            placeholder: "Quantity, e.g. 3 litros",
                            value: "{quantity}",
                            oninput: move |event| quantity.set(event.value()),
                        }
                        input {
                            class: "input w-full",
                            placeholder: "Responsible",
                            value: "{responsible}",
                            oninput: move |event| responsible.set(event.value()),
                        }
                        textarea {
                            class: "textarea w-full",
                            placeholder: "Observations",
                            value: "{observations}",
                            oninput: move |event| observations.set(event.value()),
                        }
                        if let Some(err) = error() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Save label"
                        }
                    }
                }
                div { class: "card shadow-sm",
                    div { class: "card-body",
                        h2 { class: "card-title", "QR code content" }
                        pre { class: "text-xs whitespace-pre-wrap break-all bg-base-200 p-2", "{qr_preview}" }
                    }
                }
            }
        }
    )
}
