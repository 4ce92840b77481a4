//! # Per-tab session state
//!
//! [`Session`] is the single in-memory record of who is signed in and which
//! documents belong to them. The UI keeps exactly one instance in a shared signal;
//! every view reads and mutates it through the accessors below. Setters do no
//! validation, that is the caller's job.
//!
//! The one rule enforced here is ownership: `documents` always belongs to the user
//! in `user_id`. Changing or clearing the user id empties the list.

use crate::models::{DocId, Document, UserId};

/// In-progress signup form values.
///
/// Held in the session so they survive re-renders of the signup view; cleared
/// whenever the user navigates to signup or login so a previous draft never leaks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupDraft {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub mobile_number: String,
    /// Set when a submit found `password != confirm_password`.
    pub password_mismatch: bool,
}

impl SignupDraft {
    /// Clear the mismatch flag once the two password fields agree again.
    pub fn refresh_mismatch(&mut self) {
        if self.password_mismatch && self.password == self.confirm_password {
            self.password_mismatch = false;
        }
    }
}

/// Session state for the current tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    user_id: Option<UserId>,
    username: String,
    documents: Vec<Document>,
    draft: SignupDraft,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Presence of a user id is the only authentication signal.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Set or clear the signed-in user. Switching users drops the loaded documents.
    pub fn set_user_id(&mut self, user_id: Option<UserId>) {
        if self.user_id != user_id {
            self.documents.clear();
        }
        self.user_id = user_id;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Record a successful authentication.
    pub fn sign_in(&mut self, user_id: UserId, username: impl Into<String>) {
        self.set_user_id(Some(user_id));
        self.set_username(username);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Replace the whole list, as after a fetch.
    pub fn set_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
    }

    pub fn push_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Remove the entry with `doc_id`. Returns whether one was removed.
    pub fn remove_document(&mut self, doc_id: DocId) -> bool {
        match self.documents.iter().position(|d| d.doc_id == doc_id) {
            Some(index) => {
                self.documents.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SignupDraft {
        &mut self.draft
    }

    pub fn clear_draft(&mut self) {
        self.draft = SignupDraft::default();
    }

    /// Return to the empty baseline: no user, no name, no documents.
    pub fn logout(&mut self) {
        self.user_id = None;
        self.username.clear();
        self.documents.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentType;
    use chrono::NaiveDate;

    fn doc(id: i64) -> Document {
        Document {
            doc_id: DocId(id),
            user_id: Some(UserId(7)),
            document_type: DocumentType::Passport,
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, id as u32).unwrap(),
        }
    }

    fn signed_in_with_docs() -> Session {
        let mut session = Session::new();
        session.sign_in(UserId(7), "ann");
        session.set_documents(vec![doc(1), doc(2), doc(3)]);
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
        assert!(session.documents().is_empty());
    }

    #[test]
    fn test_sign_in_sets_identity() {
        let mut session = Session::new();
        session.sign_in(UserId(7), "ann");
        assert_eq!(session.user_id(), Some(UserId(7)));
        assert_eq!(session.username(), "ann");
    }

    #[test]
    fn test_switching_user_clears_documents() {
        let mut session = signed_in_with_docs();
        session.set_user_id(Some(UserId(8)));
        assert!(session.documents().is_empty());
    }

    #[test]
    fn test_same_user_keeps_documents() {
        let mut session = signed_in_with_docs();
        session.set_user_id(Some(UserId(7)));
        assert_eq!(session.documents().len(), 3);
    }

    #[test]
    fn test_remove_document_removes_only_match() {
        let mut session = signed_in_with_docs();
        assert!(session.remove_document(DocId(3)));
        let ids: Vec<_> = session.documents().iter().map(|d| d.doc_id).collect();
        assert_eq!(ids, vec![DocId(1), DocId(2)]);
        assert!(!session.remove_document(DocId(3)));
        assert_eq!(session.documents().len(), 2);
    }

    #[test]
    fn test_logout_resets_baseline() {
        let mut session = signed_in_with_docs();
        session.logout();
        assert_eq!(session.user_id(), None);
        assert_eq!(session.username(), "");
        assert!(session.documents().is_empty());

        // Already empty stays empty
        session.logout();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_mismatch_clears_once_passwords_agree() {
        let mut draft = SignupDraft {
            password: "a".into(),
            confirm_password: "b".into(),
            password_mismatch: true,
            ..Default::default()
        };
        draft.refresh_mismatch();
        assert!(draft.password_mismatch);

        draft.confirm_password = "a".into();
        draft.refresh_mismatch();
        assert!(!draft.password_mismatch);
    }

    #[test]
    fn test_clear_draft() {
        let mut session = Session::new();
        session.draft_mut().username = "bob".into();
        session.draft_mut().password_mismatch = true;
        session.clear_draft();
        assert_eq!(session.draft(), &SignupDraft::default());
    }
}
