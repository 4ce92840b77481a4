//! Forgot password page. The backend has no reset endpoint yet, so this only
//! collects the identifier and says so.

use dioxus::prelude::*;
use ui::{post_notice, use_notice, NoticeLevel};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut notice = use_notice();
    let mut contact = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if contact().trim().is_empty() {
            post_notice(
                &mut notice,
                NoticeLevel::Warning,
                "Please enter your registered email or mobile number",
            );
            return;
        }
        post_notice(
            &mut notice,
            NoticeLevel::Info,
            "Password reset is not available yet. Please contact support.",
        );
    };

    rsx! {
        div {
            class: "container",
            div { class: "title", "DOCUMENT LIFE TRACKER" }
            h1 { "Forgot Password" }

            form {
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Enter your registered email / mobile number",
                    value: contact(),
                    oninput: move |evt: FormEvent| contact.set(evt.value()),
                }
                button { r#type: "submit", "Send Reset Link" }
            }

            p {
                class: "aside",
                Link { to: Route::Login {}, "Back to Login" }
            }
        }
    }
}
