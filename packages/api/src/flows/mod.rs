//! # User flows
//!
//! The login, signup and tracker operations, written against any [`Backend`].
//! Each async flow validates locally first (no request is made when validation
//! fails), then calls the backend, and returns a value describing the outcome.
//! Applying that outcome to the [`store::Session`] is a separate synchronous step
//! so callers never hold the session across an `.await`.
//!
//! [`Backend`]: crate::Backend

pub mod auth;
pub mod tracker;

use store::ValidationError;
use thiserror::Error;

use crate::error::ApiError;

pub use auth::{login, prepare_signup, signup, Registered, SignedIn};
pub use tracker::{add_document, delete_document, fetch_documents, logout};

const UNEXPECTED_RESPONSE: &str = "Unexpected server response. Please try again.";

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no user is signed in")]
    SignedOut,
}

impl FlowError {
    /// Text to show the user: validation messages as-is, the backend's error
    /// detail when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FlowError::Validation(e) => e.to_string(),
            FlowError::Api(ApiError::UnexpectedResponse) => UNEXPECTED_RESPONSE.to_string(),
            FlowError::Api(e) => e.detail().unwrap_or(fallback).to_string(),
            FlowError::SignedOut => "Please log in again.".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, FlowError::Validation(_))
    }
}
