//! Login and signup.

use store::validate::{validate_credentials, validate_signup};
use store::{Session, SignupDraft, UserId, ValidationError, View};

use super::FlowError;
use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{LoginRequest, NewUser};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED: &str = "Signup failed. Try again.";

/// A credential check the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub user_id: UserId,
    pub name: String,
}

impl SignedIn {
    /// Store the identity in the session and pick the next view.
    pub fn apply(self, session: &mut Session) -> View {
        session.sign_in(self.user_id, self.name);
        View::Tracker
    }
}

/// Check `username`/`password` with the backend.
///
/// Only a response carrying both a user id and a name counts as success.
pub async fn login<B: Backend>(
    backend: &B,
    username: &str,
    password: &str,
) -> Result<SignedIn, FlowError> {
    validate_credentials(username, password)?;

    tracing::info!(username, "logging in");
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = backend.login(&request).await.inspect_err(|e| {
        tracing::error!(error = %e, "login request failed");
    })?;

    match (response.user_id, response.name) {
        (Some(user_id), Some(name)) => Ok(SignedIn { user_id, name }),
        _ => {
            tracing::warn!("login response is missing user_id or name");
            Err(ApiError::UnexpectedResponse.into())
        }
    }
}

/// Validate the signup draft and build the request body.
///
/// Updates `draft.password_mismatch` as a side effect.
pub fn prepare_signup(draft: &mut SignupDraft) -> Result<NewUser, ValidationError> {
    validate_signup(draft)?;
    Ok(NewUser {
        name: draft.username.clone(),
        mobile_number: draft.mobile_number.clone(),
        email: draft.email.clone(),
        password: draft.password.clone(),
    })
}

/// A newly created account.
#[derive(Debug, Clone, PartialEq)]
pub struct Registered {
    pub user_id: UserId,
    /// Display name echoed by the backend.
    pub name: Option<String>,
}

impl Registered {
    /// Sign the new account in. Falls back to the draft's username for display and
    /// clears the draft afterwards.
    pub fn apply(self, session: &mut Session) -> View {
        let name = self
            .name
            .unwrap_or_else(|| session.draft().username.clone());
        session.sign_in(self.user_id, name);
        session.clear_draft();
        View::Tracker
    }
}

/// Create the account described by `request`.
pub async fn signup<B: Backend>(backend: &B, request: &NewUser) -> Result<Registered, FlowError> {
    tracing::info!(name = %request.name, "creating account");
    let created = backend.create_user(request).await.inspect_err(|e| {
        tracing::error!(error = %e, "signup request failed");
    })?;

    match created.user_id {
        Some(user_id) => Ok(Registered {
            user_id,
            name: created.name,
        }),
        None => {
            tracing::warn!("signup response has no user_id");
            Err(ApiError::UnexpectedResponse.into())
        }
    }
}
