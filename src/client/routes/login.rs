use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::user::UserState, util::api::pin_login},
    model::{user::PinLoginDto, validation::validate_login},
};

#[component]
pub fn Login() -> Element {
    let mut user_store = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut pin = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let login = PinLoginDto {
            username: username().trim().to_string(),
            pin: pin(),
        };
        if let Err(err) = validate_login(&login) {
            error.set(Some(err.to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match pin_login(&login).await {
                Ok(user) => {
                    user_store.set(UserState {
                        user: Some(user),
                        fetched: true,
                    });
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err));
                    pin.set(String::new());
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "Login | Etiqueta" }
        Meta {
            name: "description",
            content: "Food labeling for professional kitchens."
        }
        div { class: "min-h-screen flex items-center justify-center p-4",
            form {
                class: "card shadow-sm w-full max-w-96",
                onsubmit,
                div { class: "card-body flex flex-col gap-3",
                    h2 { class: "card-title", "Etiqueta" }
                    p { class: "text-sm", "Sign in with your username and 4-digit PIN" }
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Username",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |event| username.set(event.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "password",
                        inputmode: "numeric",
                        placeholder: "PIN",
                        maxlength: 4,
                        value: "{pin}",
                        oninput: move |event| {
                            pin.set(event.value().chars().filter(char::is_ascii_digit).take(4).collect())
                        },
                    }
                    if let Some(err) = error() {
                        p { class: "text-error text-sm", "{err}" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Sign in"
                    }
                }
            }
        }
    )
}
