use dioxus::prelude::*;

use crate::client::{components::Navbar, router::Route, store::user::UserState};

/// Layout of the signed-in pages; signed-out visitors are sent to the login page
#[component]
pub fn AppLayout() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    use_effect(move || {
        let state = user_store.read();
        if state.fetched && state.user.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    let state = user_store.read();
    if state.user.is_none() {
        return rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    rsx!(
        Navbar {}
        Outlet::<Route> {}
    )
}
