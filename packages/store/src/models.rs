//! # Domain models for tracked documents
//!
//! Defines the records the tracker shows and the identifiers the backend hands
//! out. These types are `Serialize + Deserialize` so they can be decoded straight
//! from backend responses and encoded into requests.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserId`] | Opaque server-assigned user identifier. |
//! | [`DocId`] | Opaque server-assigned document identifier, unique within one user's collection. |
//! | [`DocumentType`] | The fixed set of document kinds a user can track. Transmitted as its display label (`"Driving License"`). |
//! | [`Document`] | One tracked item: id, owner, type and expiry date (`YYYY-MM-DD` on the wire). |
//! | [`ExpiryStatus`] | Classification of a document's expiry date relative to today. |
//!
//! ## Expiry classification
//!
//! [`Document::status`] mirrors the backend's reminder job, which emails users about
//! documents expiring within [`REMINDER_WINDOW_DAYS`] days (inclusive).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of days before expiry during which a document counts as expiring soon.
pub const REMINDER_WINDOW_DAYS: i64 = 7;

/// Server-assigned user identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned document identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub i64);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of document being tracked.
///
/// Decoding is lenient: a label the client does not know becomes
/// [`DocumentType::Other`], so one odd record cannot hide the rest of a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentType {
    #[serde(rename = "Aadhar Card")]
    AadharCard,
    #[serde(rename = "Vehicle Registration")]
    VehicleRegistration,
    #[serde(rename = "Passport")]
    Passport,
    #[serde(rename = "Driving License")]
    DrivingLicense,
    #[serde(rename = "Vehicle Insurance")]
    VehicleInsurance,
    #[serde(rename = "Income Certificate")]
    IncomeCertificate,
    #[serde(rename = "Other")]
    Other,
}

impl DocumentType {
    /// Every selectable type, in the order the picker lists them.
    pub const ALL: [DocumentType; 7] = [
        DocumentType::AadharCard,
        DocumentType::VehicleRegistration,
        DocumentType::Passport,
        DocumentType::DrivingLicense,
        DocumentType::VehicleInsurance,
        DocumentType::IncomeCertificate,
        DocumentType::Other,
    ];

    /// Display label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::AadharCard => "Aadhar Card",
            DocumentType::VehicleRegistration => "Vehicle Registration",
            DocumentType::Passport => "Passport",
            DocumentType::DrivingLicense => "Driving License",
            DocumentType::VehicleInsurance => "Vehicle Insurance",
            DocumentType::IncomeCertificate => "Income Certificate",
            DocumentType::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label does not name a [`DocumentType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for DocumentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(label.parse().unwrap_or(DocumentType::Other))
    }
}

/// A tracked document as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: DocId,
    /// Owner. Older backend builds omit it from list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub document_type: DocumentType,
    /// Serialized as `YYYY-MM-DD`.
    pub expiry_date: NaiveDate,
}

/// Where a document's expiry date falls relative to today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Valid,
}

impl ExpiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::ExpiringSoon => "Expiring soon",
            ExpiryStatus::Valid => "Valid",
        }
    }
}

impl Document {
    /// Days from `today` until expiry; negative once expired.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn status(&self, today: NaiveDate) -> ExpiryStatus {
        match self.days_left(today) {
            d if d < 0 => ExpiryStatus::Expired,
            d if d <= REMINDER_WINDOW_DAYS => ExpiryStatus::ExpiringSoon,
            _ => ExpiryStatus::Valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn passport(expiry: &str) -> Document {
        Document {
            doc_id: DocId(1),
            user_id: Some(UserId(7)),
            document_type: DocumentType::Passport,
            expiry_date: date(expiry),
        }
    }

    #[test]
    fn test_document_decodes_backend_record() {
        let json = r#"{"doc_id":3,"user_id":7,"document_type":"Driving License","expiry_date":"2031-01-15"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.doc_id, DocId(3));
        assert_eq!(doc.user_id, Some(UserId(7)));
        assert_eq!(doc.document_type, DocumentType::DrivingLicense);
        assert_eq!(doc.expiry_date, date("2031-01-15"));
    }

    #[test]
    fn test_document_without_owner_decodes() {
        let json = r#"{"doc_id":4,"document_type":"Other","expiry_date":"2030-06-01"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.user_id, None);
    }

    #[test]
    fn test_expiry_date_encodes_as_iso_date() {
        let json = serde_json::to_value(passport("2030-02-03")).unwrap();
        assert_eq!(json["expiry_date"], "2030-02-03");
        assert_eq!(json["document_type"], "Passport");
    }

    #[test]
    fn test_unknown_type_decodes_as_other() {
        let json = r#"[
            {"doc_id":1,"document_type":"Library Card","expiry_date":"2030-06-01"},
            {"doc_id":2,"document_type":"Passport","expiry_date":"2031-01-01"}
        ]"#;
        let docs: Vec<Document> = serde_json::from_str(json).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].document_type, DocumentType::Other);
        assert_eq!(docs[1].document_type, DocumentType::Passport);
    }

    #[test]
    fn test_unknown_label_does_not_parse() {
        assert_eq!(
            "Library Card".parse::<DocumentType>(),
            Err(UnknownDocumentType("Library Card".to_string()))
        );
    }

    #[test]
    fn test_label_parses_back() {
        for t in DocumentType::ALL {
            assert_eq!(t.label().parse::<DocumentType>(), Ok(t));
        }
    }

    #[test]
    fn test_expiry_status_boundaries() {
        let today = date("2026-03-10");
        assert_eq!(passport("2026-03-09").status(today), ExpiryStatus::Expired);
        assert_eq!(passport("2026-03-10").status(today), ExpiryStatus::ExpiringSoon);
        assert_eq!(passport("2026-03-17").status(today), ExpiryStatus::ExpiringSoon);
        assert_eq!(passport("2026-03-18").status(today), ExpiryStatus::Valid);
        assert_eq!(passport("2026-03-18").days_left(today), 8);
    }
}
