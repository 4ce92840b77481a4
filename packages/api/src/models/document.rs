use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store::{DocumentType, UserId, ValidDocument};

/// Body for `POST /documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub user_id: UserId,
    pub document_type: DocumentType,
    /// Serialized as `YYYY-MM-DD`.
    pub expiry_date: NaiveDate,
}

impl NewDocument {
    pub fn new(user_id: UserId, document: ValidDocument) -> Self {
        Self {
            user_id,
            document_type: document.document_type,
            expiry_date: document.expiry_date,
        }
    }
}
