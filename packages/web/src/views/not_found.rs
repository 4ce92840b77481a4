use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "container",
            div { class: "title", "DOCUMENT LIFE TRACKER" }
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            p {
                class: "aside",
                Link { to: Route::Login {}, "Go to Login" }
            }
        }
    }
}
