//! User-facing notices: the banner that replaces blocking alerts.

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

const NOTICE_CSS: Asset = asset!("/assets/styling/notice.css");

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

/// Replace the current notice. Errors and warnings are logged as well.
pub fn post_notice(notice: &mut Signal<Option<Notice>>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        NoticeLevel::Error => tracing::error!("{message}"),
        NoticeLevel::Warning => tracing::warn!("{message}"),
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{message}"),
    }
    notice.set(Some(Notice { level, message }));
}

/// Shows the current notice, if any, with a dismiss button.
#[component]
pub fn NoticeBanner() -> Element {
    let mut notice = use_notice();

    let Some(current) = notice() else {
        return rsx! {};
    };

    rsx! {
        document::Stylesheet { href: NOTICE_CSS }

        div {
            class: match current.level {
                NoticeLevel::Error => "notice error",
                NoticeLevel::Warning => "notice warning",
                NoticeLevel::Success => "notice success",
                NoticeLevel::Info => "notice info",
            },
            role: "alert",
            span { "{current.message}" }
            button {
                class: "notice-dismiss",
                title: "Dismiss",
                onclick: move |_| notice.set(None),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
