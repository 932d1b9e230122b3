use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn EtiquetaTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Dashboard {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Etiqueta"
                }
                p { class: "text-xs",
                    "v0.1.0-alpha.1"
                }
            }
        }
    )
}
