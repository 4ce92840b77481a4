//! Signup page view. Form fields live in the session draft so they survive re-renders.

use api::flows::{self, auth::SIGNUP_FAILED};
use dioxus::prelude::*;
use store::{SignupDraft, ValidationError};
use ui::{post_notice, use_backend, use_in_flight, use_notice, use_session, Navbar, NoticeLevel};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut notice = use_notice();
    let nav = use_navigator();
    let in_flight = use_in_flight();

    // Start from an empty draft on every visit.
    use_effect(move || session.write().clear_draft());

    let mut edit = move |apply: fn(&mut SignupDraft, String), value: String| {
        let mut session = session.write();
        let draft = session.draft_mut();
        apply(draft, value);
        draft.refresh_mismatch();
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let prepared = flows::prepare_signup(session.write().draft_mut());
        let request = match prepared {
            Ok(request) => request,
            // Shown inline under the password fields.
            Err(ValidationError::PasswordMismatch) => return,
            Err(e) => {
                post_notice(&mut notice, NoticeLevel::Warning, e.to_string());
                return;
            }
        };
        let Some(guard) = in_flight.try_begin() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let _guard = guard;
            match flows::signup(&backend, &request).await {
                Ok(registered) => {
                    let view = registered.apply(&mut session.write());
                    post_notice(&mut notice, NoticeLevel::Success, "Account created successfully!");
                    nav.push(Route::from(view));
                }
                Err(e) => {
                    post_notice(&mut notice, NoticeLevel::Error, e.user_message(SIGNUP_FAILED));
                }
            }
        });
    };

    let back_to_login = move |_| {
        session.write().clear_draft();
        nav.push(Route::Login {});
    };

    let draft = session.read().draft().clone();

    rsx! {
        Navbar {
            button { onclick: back_to_login, "Back to Login" }
        }

        div {
            class: "container",
            div { class: "title", "DOCUMENT LIFE TRACKER" }
            h1 { "Sign Up" }

            form {
                onsubmit: handle_submit,

                input {
                    r#type: "text",
                    placeholder: "User Name",
                    value: draft.username,
                    oninput: move |evt: FormEvent| edit(|d, v| d.username = v, evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Mobile Number",
                    value: draft.mobile_number,
                    oninput: move |evt: FormEvent| edit(|d, v| d.mobile_number = v, evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: draft.email,
                    oninput: move |evt: FormEvent| edit(|d, v| d.email = v, evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: draft.password,
                    oninput: move |evt: FormEvent| edit(|d, v| d.password = v, evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm Password",
                    value: draft.confirm_password,
                    oninput: move |evt: FormEvent| edit(|d, v| d.confirm_password = v, evt.value()),
                }

                if draft.password_mismatch {
                    p { class: "field-warning", "Passwords do not match" }
                }

                button {
                    r#type: "submit",
                    disabled: in_flight.is_active(),
                    if in_flight.is_active() { "Creating account..." } else { "Sign Up" }
                }
            }
        }
    }
}
