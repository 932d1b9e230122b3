use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaPen, FaTrash};
use dioxus_free_icons::Icon;
use uuid::Uuid;

use crate::{
    client::{
        components::Page,
        util::{
            api::{create_template, delete_template, get_templates, update_template},
            datetime,
        },
    },
    model::{
        label::{FoodLabelDto, LabelStatus},
        print::html_command,
        template::{LabelTemplateDto, SaveTemplateDto, TemplateLayout},
        validation::validate_template,
    },
};

const LAYOUTS: [(TemplateLayout, &str); 3] = [
    (TemplateLayout::Standard, "Standard"),
    (TemplateLayout::Compact, "Compact"),
    (TemplateLayout::Detailed, "Detailed"),
];

/// Label rendered in the editor preview
fn sample_label() -> FoodLabelDto {
    let now = datetime::now();

    FoodLabelDto {
        id: Uuid::nil(),
        product_name: "Molho de Tomate".to_string(),
        product_id: None,
        production_date: now,
        expiration_date: now + chrono::Duration::days(3),
        quantity: "2 litros".to_string(),
        responsible: Some("Ana".to_string()),
        observations: None,
        status: LabelStatus::Active,
        created_at: now,
    }
}

#[component]
pub fn Templates() -> Element {
    let mut templates = use_resource(|| async move { get_templates().await });
    // ID of the custom template being edited, `None` while creating one
    let mut editing = use_signal(|| None::<String>);
    let mut draft = use_signal(|| None::<SaveTemplateDto>);
    let mut revision = use_signal(|| 0u32);

    let mut open = move |template_id: Option<String>, template: SaveTemplateDto| {
        editing.set(template_id);
        draft.set(Some(template));
        *revision.write() += 1;
    };

    let list = match &*templates.read() {
        Some(Ok(list)) => Ok(list.clone()),
        Some(Err(err)) => Err(err.clone()),
        None => Ok(Vec::new()),
    };

    rsx!(
        Title { "Templates | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 grid grid-cols-1 lg:grid-cols-3 gap-4",
                div { class: "flex flex-col gap-2",
                    h2 { class: "text-lg font-semibold", "Templates" }
                    match list {
                        Ok(list) => rsx!(
                            ul { class: "flex flex-col gap-2",
                                for template in list {
                                    li {
                                        key: "{template.id}",
                                        class: "card shadow-sm",
                                        div { class: "card-body flex flex-row items-center justify-between p-3",
                                            div {
                                                p { class: "font-semibold", "{template.name}" }
                                                p { class: "text-xs opacity-70",
                                                    "{template.width} x {template.height} mm"
                                                }
                                            }
                                            if template.built_in {
                                                button {
                                                    class: "btn btn-sm flex gap-1",
                                                    onclick: {
                                                        let template = template.clone();
                                                        move |_| {
                                                            let mut copy = SaveTemplateDto::from(template.clone());
                                                            copy.name = format!("{} copy", copy.name);
                                                            open(None, copy);
                                                        }
                                                    },
                                                    Icon { width: 12, height: 12, icon: FaCopy }
                                                    "Copy"
                                                }
                                            } else {
                                                button {
                                                    class: "btn btn-sm flex gap-1",
                                                    onclick: {
                                                        let template = template.clone();
                                                        move |_| {
                                                            open(
                                                                Some(template.id.clone()),
                                                                SaveTemplateDto::from(template.clone()),
                                                            )
                                                        }
                                                    },
                                                    Icon { width: 12, height: 12, icon: FaPen }
                                                    "Edit"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        ),
                        Err(err) => rsx!(p { class: "text-error", "{err}" }),
                    }
                }
                div { class: "lg:col-span-2",
                    if let Some(initial) = draft() {
                        TemplateEditor {
                            key: "{revision}",
                            template_id: editing(),
                            initial,
                            on_saved: move |saved: LabelTemplateDto| {
                                templates.restart();
                                open(Some(saved.id.clone()), SaveTemplateDto::from(saved));
                            },
                            on_deleted: move |_| {
                                templates.restart();
                                editing.set(None);
                                draft.set(None);
                            },
                        }
                    } else {
                        p { class: "opacity-70", "Copy a built-in template or edit one of your own." }
                    }
                }
            }
        }
    )
}

#[component]
fn TemplateEditor(
    template_id: Option<String>,
    initial: SaveTemplateDto,
    on_saved: EventHandler<LabelTemplateDto>,
    on_deleted: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut error = use_signal(|| None::<String>);

    let save_id = template_id.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let template = draft();
        if let Err(err) = validate_template(&template) {
            error.set(Some(err.to_string()));
            return;
        }

        let template_id = save_id.clone();
        spawn(async move {
            let saved = match template_id {
                Some(template_id) => update_template(&template_id, &template).await,
                None => create_template(&template).await,
            };
            match saved {
                Ok(saved) => {
                    error.set(None);
                    on_saved.call(saved);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let delete_id = template_id.clone();
    let remove = move |_| {
        let Some(template_id) = delete_id.clone() else {
            return;
        };

        spawn(async move {
            match delete_template(&template_id).await {
                Ok(()) => on_deleted.call(()),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let current = draft();
    let layout = current.layout.as_str();
    let preview = html_command(&sample_label(), &current.to_preview());

    rsx!(
        form { class: "card shadow-sm", onsubmit,
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title",
                    if template_id.is_some() {
                        "Edit template"
                    } else {
                        "New template"
                    }
                }
                input {
                    class: "input w-full",
                    placeholder: "Name",
                    value: "{current.name}",
                    oninput: move |event| draft.write().name = event.value(),
                }
                div { class: "grid grid-cols-2 md:grid-cols-3 gap-2",
                    NumberField {
                        label: "Width (mm)",
                        value: current.width,
                        min: 20,
                        max: 150,
                        onchange: move |value| draft.write().width = value,
                    }
                    NumberField {
                        label: "Height (mm)",
                        value: current.height,
                        min: 20,
                        max: 150,
                        onchange: move |value| draft.write().height = value,
                    }
                    NumberField {
                        label: "QR size (px)",
                        value: current.qr_size,
                        min: 32,
                        max: 160,
                        onchange: move |value| draft.write().qr_size = value,
                    }
                    NumberField {
                        label: "Product font (pt)",
                        value: current.font_size.product,
                        min: 6,
                        max: 48,
                        onchange: move |value| draft.write().font_size.product = value,
                    }
                    NumberField {
                        label: "Details font (pt)",
                        value: current.font_size.details,
                        min: 6,
                        max: 48,
                        onchange: move |value| draft.write().font_size.details = value,
                    }
                    NumberField {
                        label: "Small font (pt)",
                        value: current.font_size.small,
                        min: 6,
                        max: 48,
                        onchange: move |value| draft.write().font_size.small = value,
                    }
                }
                div { class: "flex flex-wrap items-center gap-4",
                    select {
                        class: "select",
                        value: "{layout}",
                        onchange: move |event| {
                            if let Some(layout) = TemplateLayout::parse(&event.value()) {
                                draft.write().layout = layout;
                            }
                        },
                        for (layout, name) in LAYOUTS {
                            option { key: "{name}", value: layout.as_str(), "{name}" }
                        }
                    }
                    label { class: "label gap-2",
                        input {
                            class: "checkbox",
                            r#type: "checkbox",
                            checked: current.show_qr,
                            onchange: move |event| draft.write().show_qr = event.checked(),
                        }
                        "Show QR code"
                    }
                }
                div { class: "flex flex-wrap gap-4",
                    ColorField {
                        label: "Background",
                        value: current.colors.background.clone(),
                        onchange: move |value| draft.write().colors.background = value,
                    }
                    ColorField {
                        label: "Text",
                        value: current.colors.text.clone(),
                        onchange: move |value| draft.write().colors.text = value,
                    }
                    ColorField {
                        label: "Accent",
                        value: current.colors.accent.clone(),
                        onchange: move |value| draft.write().colors.accent = value,
                    }
                }
                div { class: "overflow-auto bg-base-200 p-4", dangerous_inner_html: "{preview}" }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                div { class: "flex gap-2",
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    if template_id.is_some() {
                        button {
                            class: "btn btn-outline btn-error flex gap-2",
                            r#type: "button",
                            onclick: remove,
                            Icon { width: 14, height: 14, icon: FaTrash }
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn NumberField(
    label: &'static str,
    value: i32,
    min: i32,
    max: i32,
    onchange: EventHandler<i32>,
) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1 text-sm",
            "{label}"
            input {
                class: "input",
                r#type: "number",
                min,
                max,
                value: "{value}",
                oninput: move |event| onchange.call(event.value().trim().parse().unwrap_or(0)),
            }
        }
    )
}

#[component]
fn ColorField(label: &'static str, value: String, onchange: EventHandler<String>) -> Element {
    rsx!(
        label { class: "flex items-center gap-2 text-sm",
            input {
                r#type: "color",
                value: "{value}",
                oninput: move |event| onchange.call(event.value()),
            }
            "{label}"
        }
    )
}
