//! Tracker view: the signed-in user's documents, add and delete.

use api::flows::{
    self,
    tracker::{DELETE_FAILED, SAVE_FAILED},
};
use dioxus::prelude::*;
use store::validate::{min_expiry_date, today};
use store::{guard_tracker, DocId, DocumentForm, Guard, LoadState, View};
use ui::{
    post_notice, use_backend, use_in_flight, use_loader, use_notice, use_session, AddDocumentForm,
    DocumentTable, LogoutButton, Navbar, NoticeLevel,
};

use crate::Route;

#[component]
pub fn Tracker() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut loader = use_loader();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut form = use_signal(DocumentForm::default);
    let saving = use_in_flight();
    let deleting = use_in_flight();
    let user_id = use_memo(move || session.read().user_id());

    // Re-evaluated on every session change, so logging out leaves the tracker.
    use_effect(move || {
        if let Guard::Redirect(view) = guard_tracker(&session.read()) {
            nav.replace(Route::from(view));
        }
    });

    // Fetch once per mount and again whenever the signed-in user changes.
    let load_backend = backend.clone();
    use_effect(move || {
        let Some(ticket) = loader.write().begin(user_id()) else {
            return;
        };
        let backend = load_backend.clone();
        spawn(async move {
            let result = flows::fetch_documents(&backend, ticket.user_id()).await;
            if let Err(rejected) = loader.write().complete(&ticket, &mut session.write(), result) {
                tracing::debug!(%rejected, "discarding document load");
            }
        });
    });

    // Results arriving after the view is gone must not be applied.
    use_drop(move || {
        if let Ok(mut loader) = loader.try_write() {
            loader.cancel();
        }
    });

    let save_backend = backend.clone();
    let handle_save = move |_: ()| {
        let Some(guard) = saving.try_begin() else {
            return;
        };
        let backend = save_backend.clone();
        let current = form();
        let owner = user_id();
        // Read the date at submit time; the tab may have stayed open past midnight.
        let today = today();
        spawn(async move {
            let _guard = guard;
            match flows::add_document(&backend, owner, &current, today).await {
                Ok(saved) if session.peek().user_id() == owner => {
                    session.write().push_document(saved);
                    form.write().clear();
                    post_notice(&mut notice, NoticeLevel::Success, "Document saved successfully");
                }
                Ok(saved) => {
                    tracing::debug!(doc_id = %saved.doc_id, "session changed while saving; not listing");
                }
                Err(e) => {
                    let level = if e.is_validation() {
                        NoticeLevel::Warning
                    } else {
                        NoticeLevel::Error
                    };
                    post_notice(&mut notice, level, e.user_message(SAVE_FAILED));
                }
            }
        });
    };

    let handle_delete = move |doc_id: DocId| {
        let Some(guard) = deleting.try_begin() else {
            return;
        };
        let backend = backend.clone();
        let owner = user_id();
        spawn(async move {
            let _guard = guard;
            match flows::delete_document(&backend, doc_id).await {
                Ok(doc_id) if session.peek().user_id() == owner => {
                    session.write().remove_document(doc_id);
                }
                Ok(_) => {}
                Err(e) => {
                    post_notice(&mut notice, NoticeLevel::Error, e.user_message(DELETE_FAILED));
                }
            }
        });
    };

    if guard_tracker(&session.read()) != Guard::Allow {
        return rsx! {};
    }

    let username = session.read().username().to_string();
    let documents = session.read().documents().to_vec();
    let state = loader.read().state().clone();
    let today = today();

    rsx! {
        Navbar {
            LogoutButton {
                on_logout: move |view: View| {
                    nav.push(Route::from(view));
                },
            }
            button {
                onclick: move |_| {
                    nav.push(Route::Signup {});
                },
                "Signup"
            }
        }

        div {
            class: "container",
            div { class: "title", "DOCUMENT LIFE TRACKER" }
            h1 { "Hello {username}" }

            AddDocumentForm {
                form,
                min_date: min_expiry_date(today),
                saving: saving.is_active(),
                on_save: handle_save,
            }

            {match state {
                LoadState::Idle | LoadState::Loading(_) => rsx! {
                    p { "Loading documents..." }
                },
                LoadState::Failed(_) if documents.is_empty() => rsx! {
                    p { class: "field-warning", "Could not load documents. Please try again later." }
                },
                _ if documents.is_empty() => rsx! {
                    p { "No documents yet. Add one above." }
                },
                _ => rsx! {
                    DocumentTable {
                        documents,
                        today,
                        deleting: deleting.is_active(),
                        on_delete: handle_delete,
                    }
                },
            }}
        }
    }
}
