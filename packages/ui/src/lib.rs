//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const TRACKER_CSS: Asset = asset!("/assets/styling/tracker.css");

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{use_backend, use_loader, use_session, LogoutButton, SessionProvider};

pub mod notice;
pub use notice::{post_notice, use_notice, Notice, NoticeBanner, NoticeLevel};

mod in_flight;
pub use in_flight::{use_in_flight, InFlight, InFlightGuard};

mod documents;
pub use documents::{AddDocumentForm, DocumentTable};
