use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, store::user::UserState, util::api::get_current_user};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));

    // Resolve the signed-in user once on load
    use_future(move || async move {
        match get_current_user().await {
            Ok(user) => user_store.set(UserState {
                user,
                fetched: true,
            }),
            Err(err) => {
                tracing::error!("{}", err);
                user_store.write().fetched = true;
            }
        }
    });

    rsx!(
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    )
}
