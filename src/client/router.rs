use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{Dashboard, Labels, Login, NewLabel, NotFound, Products, Templates, Users},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AppLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/labels")]
        Labels {},

        #[route("/labels/new")]
        NewLabel {},

        #[route("/products")]
        Products {},

        #[route("/templates")]
        Templates {},

        #[route("/users")]
        Users {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
