use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen p-8 flex flex-col items-center justify-center space-y-6",
            h1 { class: "text-3xl font-semibold tracking-tight text-white", "Nothing at /{path}" }
            Link {
                to: Route::Audit {},
                class: "text-sky-400 hover:text-sky-300",
                "\u{2190} Back to the audit"
            }
        }
    }
}
