//! Local form validation.
//!
//! Everything here runs before any request is built; a failed check means no
//! network call happens. Messages are the user-facing texts shown by the views.

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::models::DocumentType;
use crate::session::SignupDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    FieldsRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please select a document and expiry date.")]
    MissingDocumentFields,
    #[error("Please choose a future expiry date.")]
    ExpiryNotInFuture,
}

/// Whitespace-only text fields count as empty.
fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Both login fields must be filled in. Passwords are taken as typed, so a
/// password of spaces is still a password.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if blank(username) || password.is_empty() {
        return Err(ValidationError::FieldsRequired);
    }
    Ok(())
}

/// Check a signup draft: all five fields first, then password equality.
///
/// Sets `password_mismatch` when the passwords differ and clears it when they match.
pub fn validate_signup(draft: &mut SignupDraft) -> Result<(), ValidationError> {
    let text_fields = [&draft.username, &draft.email, &draft.mobile_number];
    if text_fields.iter().any(|f| blank(f))
        || draft.password.is_empty()
        || draft.confirm_password.is_empty()
    {
        return Err(ValidationError::FieldsRequired);
    }
    if draft.password != draft.confirm_password {
        draft.password_mismatch = true;
        return Err(ValidationError::PasswordMismatch);
    }
    draft.password_mismatch = false;
    Ok(())
}

/// Earliest expiry date accepted on `today`: tomorrow.
pub fn min_expiry_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

/// Parse the value of an `<input type="date">`. Empty or malformed input is `None`.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Values of the add-document form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentForm {
    pub document_type: Option<DocumentType>,
    pub expiry_date: Option<NaiveDate>,
}

/// A document form that passed [`DocumentForm::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidDocument {
    pub document_type: DocumentType,
    pub expiry_date: NaiveDate,
}

impl DocumentForm {
    pub fn validate(&self, today: NaiveDate) -> Result<ValidDocument, ValidationError> {
        let (Some(document_type), Some(expiry_date)) = (self.document_type, self.expiry_date)
        else {
            return Err(ValidationError::MissingDocumentFields);
        };
        if expiry_date < min_expiry_date(today) {
            return Err(ValidationError::ExpiryNotInFuture);
        }
        Ok(ValidDocument {
            document_type,
            expiry_date,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Today's date in the user's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
