//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Script { src: "https://cdn.tailwindcss.com" }
        div {
            class: "min-h-screen bg-gray-950 text-gray-100",
            Router::<Route> {}
        }
    }
}
