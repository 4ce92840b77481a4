//! Login page view with username/password form.

use api::flows::{self, auth::LOGIN_FAILED};
use dioxus::prelude::*;
use ui::{post_notice, use_backend, use_in_flight, use_notice, use_session, Navbar, NoticeLevel};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut notice = use_notice();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let in_flight = use_in_flight();

    // A signup draft never survives a visit to login.
    use_effect(move || session.write().clear_draft());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(guard) = in_flight.try_begin() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let _guard = guard;
            let result = flows::login(&backend, &username(), &password()).await;
            match result {
                Ok(signed_in) => {
                    let view = signed_in.apply(&mut session.write());
                    notice.set(None);
                    nav.push(Route::from(view));
                }
                Err(e) => {
                    let level = if e.is_validation() {
                        NoticeLevel::Warning
                    } else {
                        NoticeLevel::Error
                    };
                    post_notice(&mut notice, level, e.user_message(LOGIN_FAILED));
                }
            }
        });
    };

    rsx! {
        Navbar {
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
            h1 { "Login" }

            form {
                onsubmit: handle_submit,

                input {
                    r#type: "text",
                    placeholder: "USER NAME",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "PASSWORD",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: in_flight.is_active(),
                    if in_flight.is_active() { "Logging in..." } else { "Submit" }
                }
            }

            p {
                class: "aside",
                Link { to: Route::ForgotPassword {}, "Forgot password?" }
            }
        }
    }
}
