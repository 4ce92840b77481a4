use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top-right action row of the tracker pages.
///
/// Views pass their own buttons as children: the tracker shows Logout and
/// Signup here.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}
