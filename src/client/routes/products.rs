use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        util::api::{create_product, get_products},
    },
    model::{
        product::{CreateProductDto, ProductDto},
        validation::validate_product,
    },
};

#[component]
pub fn Products() -> Element {
    let mut products = use_resource(|| async move { get_products().await });
    let mut search = use_signal(String::new);

    let visible: Result<Vec<ProductDto>, String> = match &*products.read() {
        Some(Ok(all)) => Ok(all
            .iter()
            .filter(|product| product.matches_search(&search()))
            .cloned()
            .collect()),
        Some(Err(err)) => Err(err.clone()),
        None => Ok(Vec::new()),
    };

    rsx!(
        Title { "Products | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 grid grid-cols-1 lg:grid-cols-3 gap-4",
                div { class: "lg:col-span-2 flex flex-col gap-2",
                    input {
                        class: "input w-full",
                        r#type: "search",
                        placeholder: "Search by name or department",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                    }
                    match visible {
                        Ok(visible) => rsx!(
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "Product" }
                                        th { "Validity" }
                                        th { "Department" }
                                    }
                                }
                                tbody {
                                    for product in visible {
                                        tr { key: "{product.id}",
                                            td { "{product.name}" }
                                            td { "{product.default_validity_days} days" }
                                            td { "{product.department}" }
                                        }
                                    }
                                }
                            }
                        ),
                        Err(err) => rsx!(p { class: "text-error", "{err}" }),
                    }
                }
                ProductForm { on_created: move |_| products.restart() }
            }
        }
    )
}

#[component]
fn ProductForm(on_created: EventHandler<ProductDto>) -> Element {
    let mut name = use_signal(String::new);
    let mut validity = use_signal(|| CreateProductDto::default().default_validity_days.to_string());
    let mut department = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let product = CreateProductDto {
            name: name().trim().to_string(),
            default_validity_days: validity().trim().parse().unwrap_or(0),
            department: department().trim().to_string(),
        };
        if let Err(err) = validate_product(&product) {
            error.set(Some(err.to_string()));
            return;
        }

        spawn(async move {
            match create_product(&product).await {
                Ok(created) => {
                    error.set(None);
                    name.set(String::new());
                    department.set(String::new());
                    on_created.call(created);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        form { class: "card shadow-sm", onsubmit,
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Add product" }
                input {
                    class: "input w-full",
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |event| name.set(event.value()),
                }
                input {
                    class: "input w-full",
                    r#type: "number",
                    min: 1,
                    max: 30,
                    value: "{validity}",
                    oninput: move |event| validity.set(event.value()),
                }
                input {
                    class: "input w-full",
                    placeholder: "Department",
                    value: "{department}",
                    oninput: move |event| department.set(event.value()),
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Add" }
            }
        }
    )
}
