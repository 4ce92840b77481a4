//! Navigation targets and the tracker guard.

use crate::session::Session;

/// Views a flow can send the user to. The web crate maps these onto its routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Tracker,
}

/// Outcome of checking whether a view may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(View),
}

/// The tracker requires a signed-in user; everyone else goes to login.
pub fn guard_tracker(session: &Session) -> Guard {
    if session.is_authenticated() {
        Guard::Allow
    } else {
        Guard::Redirect(View::Login)
    }
}
