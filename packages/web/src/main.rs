use dioxus::prelude::*;

use store::{ClientConfig, View};
use ui::{NoticeBanner, SessionProvider};
use views::{ForgotPassword, Login, NotFound, Signup, Tracker};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/Login")]
    Login {},
    #[route("/Signup")]
    Signup {},
    #[route("/Tracker")]
    Tracker {},
    #[route("/ForgotPassword")]
    ForgotPassword {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Login => Route::Login {},
            View::Signup => Route::Signup {},
            View::Tracker => Route::Tracker {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../tracker.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded `tracker.toml`, with `TRACKER_API_URL` from the build environment taking precedence.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}: {}; using defaults", ClientConfig::filename(), e);
        ClientConfig::default()
    });
    match option_env!("TRACKER_API_URL") {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::TRACKER_CSS }

        SessionProvider {
            config,
            NoticeBanner {}
            Router::<Route> {}
        }
    }
}

/// `/` shows the login page.
#[component]
fn Root() -> Element {
    rsx! {
        Login {}
    }
}
