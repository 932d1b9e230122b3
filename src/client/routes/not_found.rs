use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not found | Etiqueta" }
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4",
            p { class: "text-2xl", "Page not found" }
            p { class: "text-sm", "/{path}" }
            Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
        }
    )
}
