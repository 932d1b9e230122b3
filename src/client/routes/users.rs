use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        store::user::UserState,
        util::api::{create_cook, generate_pin, get_cooks},
    },
    model::{
        print::format_label_timestamp,
        user::{CookDto, CreateCookDto},
        validation::validate_cook,
    },
};

#[component]
pub fn Users() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let is_admin = user_store
        .read()
        .user
        .as_ref()
        .is_some_and(|user| user.is_admin());

    rsx!(
        Title { "Users | Etiqueta" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                if is_admin {
                    CookManagement {}
                } else {
                    p { class: "text-error", "Only administrators can manage cooks" }
                }
            }
        }
    )
}

#[component]
fn CookManagement() -> Element {
    let mut cooks = use_resource(|| async move { get_cooks().await });
    let cooks_data = cooks.read().clone();

    rsx!(
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
            div { class: "lg:col-span-2",
                match cooks_data {
                    Some(Ok(cooks)) => rsx!(CookTable { cooks }),
                    Some(Err(err)) => rsx!(p { class: "text-error", "{err}" }),
                    None => rsx!(div { class: "skeleton h-32 w-full" }),
                }
            }
            CookForm { on_created: move |_| cooks.restart() }
        }
    )
}

#[component]
fn CookTable(cooks: Vec<CookDto>) -> Element {
    rsx!(
        table { class: "table table-md",
            thead {
                tr {
                    th { "Username" }
                    th { "Created" }
                }
            }
            tbody {
                for cook in cooks {
                    tr { key: "{cook.id}",
                        td { "{cook.username}" }
                        td { "{format_label_timestamp(cook.created_at)}" }
                    }
                }
            }
        }
    )
}

#[component]
fn CookForm(on_created: EventHandler<CookDto>) -> Element {
    let mut username = use_signal(String::new);
    let mut pin = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let suggest_pin = move |_| {
        spawn(async move {
            match generate_pin().await {
                Ok(generated) => pin.set(generated),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let cook = CreateCookDto {
            username: username().trim().to_string(),
            pin: pin(),
        };
        if let Err(err) = validate_cook(&cook) {
            error.set(Some(err.to_string()));
            return;
        }

        spawn(async move {
            match create_cook(&cook).await {
                Ok(created) => {
                    error.set(None);
                    username.set(String::new());
                    pin.set(String::new());
                    on_created.call(created);
                }
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx!(
        form { class: "card shadow-sm", onsubmit,
            div { class: "card-body flex flex-col gap-3",
                h2 { class: "card-title", "Add cook" }
                input {
                    class: "input w-full",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
                div { class: "join w-full",
                    input {
                        class: "input join-item w-full",
                        inputmode: "numeric",
                        placeholder: "4-digit PIN",
                        maxlength: 4,
                        value: "{pin}",
                        oninput: move |event| {
                            pin.set(event.value().chars().filter(char::is_ascii_digit).take(4).collect())
                        },
                    }
                    button {
                        class: "btn join-item",
                        r#type: "button",
                        onclick: suggest_pin,
                        "Generate"
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Add" }
            }
        }
    )
}
