use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBoxOpen, FaChartLine, FaPalette, FaPlus, FaRightFromBracket, FaTags, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::{components::EtiquetaTitleButton, router::Route, store::user::UserState};

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let is_admin = user_store
        .read()
        .user
        .as_ref()
        .is_some_and(|user| user.is_admin());

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                EtiquetaTitleButton {}
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li {
                        Link { to: Route::Dashboard {},
                            Icon { width: 16, height: 16, icon: FaChartLine }
                            "Dashboard"
                        }
                    }
                    li {
                        Link { to: Route::Labels {},
                            Icon { width: 16, height: 16, icon: FaTags }
                            "Labels"
                        }
                    }
                    li {
                        Link { to: Route::NewLabel {},
                            Icon { width: 16, height: 16, icon: FaPlus }
                            "New label"
                        }
                    }
                    li {
                        Link { to: Route::Products {},
                            Icon { width: 16, height: 16, icon: FaBoxOpen }
                            "Products"
                        }
                    }
                    li {
                        Link { to: Route::Templates {},
                            Icon { width: 16, height: 16, icon: FaPalette }
                            "Templates"
                        }
                    }
                    if is_admin {
                        li {
                            Link { to: Route::Users {},
                                Icon { width: 16, height: 16, icon: FaUsers }
                                "Users"
                            }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = user_store.read().user.as_ref() {
                    p { class: "text-sm mr-2", "{user.username}" }
                }
                a { href: "/api/auth/logout",
                    button {
                        class: "btn btn-outline flex gap-2",
                        Icon { width: 16, height: 16, icon: FaRightFromBracket }
                        "Logout"
                    }
                }
            }
        }
    }
}
