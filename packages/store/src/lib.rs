//! Client-side domain state for the document tracker: the per-tab [`Session`],
//! document models, form validation, the tracker navigation guard and the
//! document load state machine. No I/O happens in this crate.

pub mod config;
pub mod guard;
pub mod models;
pub mod session;
pub mod tracker;
pub mod validate;

pub use config::ClientConfig;
pub use guard::{guard_tracker, Guard, View};
pub use models::{DocId, Document, DocumentType, ExpiryStatus, UserId, REMINDER_WINDOW_DAYS};
pub use session::{Session, SignupDraft};
pub use tracker::{DocumentLoader, LoadRejected, LoadState, LoadTicket};
pub use validate::{DocumentForm, ValidDocument, ValidationError};
