//! # Document list loading state machine
//!
//! The tracker fetches the signed-in user's documents once per mount. That fetch
//! moves through an explicit [`LoadState`]:
//!
//! ```text
//! Idle ──begin(Some(user))──▶ Loading(ticket) ──complete(ok)──▶ Loaded
//!   │                               │
//!   └──begin(None)──▶ Loaded        └──complete(err)──▶ Failed
//! ```
//!
//! Every `begin` issues a fresh [`LoadTicket`]. A result is only applied when its
//! ticket is the current one and the session still belongs to the ticket's user;
//! anything else (the view was torn down, a newer load started, the user logged out)
//! is rejected with [`LoadRejected`] and the session is left alone.

use std::fmt;

use thiserror::Error;

use crate::models::{Document, UserId};
use crate::session::Session;

/// Identifies one outstanding document fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    user_id: UserId,
}

impl LoadTicket {
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading(LoadTicket),
    Loaded,
    /// Holds the logged reason; the previous document list is kept.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadRejected {
    #[error("no document load is in progress")]
    NotLoading,
    #[error("load result from generation {0} is stale")]
    Stale(u64),
}

/// Tracks the current load and hands out tickets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentLoader {
    state: LoadState,
    generation: u64,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading(_))
    }

    /// Start a load for `user_id`. Without a user there is nothing to fetch and the
    /// state goes straight to `Loaded`.
    pub fn begin(&mut self, user_id: Option<UserId>) -> Option<LoadTicket> {
        self.generation += 1;
        match user_id {
            Some(user_id) => {
                let ticket = LoadTicket {
                    generation: self.generation,
                    user_id,
                };
                self.state = LoadState::Loading(ticket);
                Some(ticket)
            }
            None => {
                self.state = LoadState::Loaded;
                None
            }
        }
    }

    /// Apply the result of the fetch identified by `ticket`.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: &LoadTicket,
        session: &mut Session,
        result: Result<Vec<Document>, E>,
    ) -> Result<(), LoadRejected> {
        let LoadState::Loading(current) = &self.state else {
            return Err(LoadRejected::NotLoading);
        };
        if current != ticket || session.user_id() != Some(ticket.user_id) {
            return Err(LoadRejected::Stale(ticket.generation));
        }
        match result {
            Ok(documents) => {
                session.set_documents(documents);
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                self.state = LoadState::Failed(e.to_string());
            }
        }
        Ok(())
    }

    /// Invalidate any outstanding ticket, e.g. when the tracker view goes away.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_loading() {
            self.state = LoadState::Idle;
        }
    }

    /// Invalidate any outstanding ticket and return to `Idle`.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = LoadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocId, DocumentType};
    use chrono::NaiveDate;

    fn doc(id: i64) -> Document {
        Document {
            doc_id: DocId(id),
            user_id: Some(UserId(7)),
            document_type: DocumentType::Other,
            expiry_date: NaiveDate::from_ymd_opt(2031, 3, 1).unwrap(),
        }
    }

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.sign_in(UserId(7), "ann");
        session
    }

    #[test]
    fn test_no_user_is_loaded_empty() {
        let mut loader = DocumentLoader::new();
        assert_eq!(loader.begin(None), None);
        assert_eq!(loader.state(), &LoadState::Loaded);
    }

    #[test]
    fn test_successful_load_replaces_documents() {
        let mut session = signed_in();
        session.set_documents(vec![doc(9)]);
        let mut loader = DocumentLoader::new();

        let ticket = loader.begin(session.user_id()).unwrap();
        assert!(loader.is_loading());
        loader
            .complete::<String>(&ticket, &mut session, Ok(vec![doc(1), doc(2)]))
            .unwrap();

        assert_eq!(loader.state(), &LoadState::Loaded);
        assert_eq!(session.documents(), &[doc(1), doc(2)]);
    }

    #[test]
    fn test_failed_load_keeps_documents() {
        let mut session = signed_in();
        session.set_documents(vec![doc(9)]);
        let mut loader = DocumentLoader::new();

        let ticket = loader.begin(session.user_id()).unwrap();
        loader
            .complete(&ticket, &mut session, Err("status 500"))
            .unwrap();

        assert_eq!(loader.state(), &LoadState::Failed("status 500".to_string()));
        assert_eq!(session.documents(), &[doc(9)]);
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let mut session = signed_in();
        let mut loader = DocumentLoader::new();

        let old = loader.begin(session.user_id()).unwrap();
        let new = loader.begin(session.user_id()).unwrap();

        assert_eq!(
            loader.complete::<String>(&old, &mut session, Ok(vec![doc(1)])),
            Err(LoadRejected::Stale(1))
        );
        assert!(session.documents().is_empty());

        loader
            .complete::<String>(&new, &mut session, Ok(vec![doc(2)]))
            .unwrap();
        assert_eq!(session.documents(), &[doc(2)]);
    }

    #[test]
    fn test_result_after_cancel_is_discarded() {
        let mut session = signed_in();
        let mut loader = DocumentLoader::new();

        let ticket = loader.begin(session.user_id()).unwrap();
        loader.cancel();
        assert_eq!(loader.state(), &LoadState::Idle);

        assert_eq!(
            loader.complete::<String>(&ticket, &mut session, Ok(vec![doc(1)])),
            Err(LoadRejected::NotLoading)
        );
        assert!(session.documents().is_empty());
    }

    #[test]
    fn test_result_for_logged_out_user_is_discarded() {
        let mut session = signed_in();
        let mut loader = DocumentLoader::new();

        let ticket = loader.begin(session.user_id()).unwrap();
        session.logout();

        assert_eq!(
            loader.complete::<String>(&ticket, &mut session, Ok(vec![doc(1)])),
            Err(LoadRejected::Stale(1))
        );
        assert!(session.documents().is_empty());
    }

    #[test]
    fn test_completed_load_cannot_complete_twice() {
        let mut session = signed_in();
        let mut loader = DocumentLoader::new();

        let ticket = loader.begin(session.user_id()).unwrap();
        loader
            .complete::<String>(&ticket, &mut session, Ok(vec![]))
            .unwrap();
        assert_eq!(
            loader.complete::<String>(&ticket, &mut session, Ok(vec![doc(1)])),
            Err(LoadRejected::NotLoading)
        );
    }
}
