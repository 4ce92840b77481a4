//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the tab's single [`Session`], the tracker's
//! [`DocumentLoader`], the current notice and the backend client, and hands them
//! to every view through context. Views never create their own copies.

use api::flows;
use api::HttpBackend;
use dioxus::prelude::*;
use store::{ClientConfig, DocumentLoader, Session, View};

use crate::notice::Notice;

/// The tab's session. Writes are visible to every reader on the next render.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Load state of the tracker's document list.
pub fn use_loader() -> Signal<DocumentLoader> {
    use_context::<Signal<DocumentLoader>>()
}

/// Client for the configured backend.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Provider component that creates the session and backend client.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let session = use_signal(Session::new);
    let loader = use_signal(DocumentLoader::new);
    let notice = use_signal(|| Option::<Notice>::None);

    use_context_provider(|| session);
    use_context_provider(|| loader);
    use_context_provider(|| notice);
    use_context_provider(move || {
        tracing::info!(base_url = config.base_url(), "using tracker backend");
        HttpBackend::new(&config)
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clears the session, drops any pending document load and reports the view to
/// go to through `on_logout`.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<View>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let mut loader = use_loader();

    let onclick = move |_| {
        let view = flows::logout(&mut session.write(), &mut loader.write());
        on_logout.call(view);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
