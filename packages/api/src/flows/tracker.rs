//! Document tracker operations: fetch, add, delete and logout.

use chrono::NaiveDate;
use store::{DocId, Document, DocumentForm, DocumentLoader, Session, UserId, View};

use super::FlowError;
use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::NewDocument;

pub const SAVE_FAILED: &str = "Error: Could not save document";
pub const DELETE_FAILED: &str = "Error: Could not delete document";

/// Fetch `user_id`'s documents. A 404 means the user has none yet.
pub async fn fetch_documents<B: Backend>(
    backend: &B,
    user_id: UserId,
) -> Result<Vec<Document>, ApiError> {
    match backend.list_documents(user_id).await {
        Err(e) if e.is_not_found() => {
            tracing::debug!(%user_id, "no documents yet");
            Ok(Vec::new())
        }
        Err(e) => {
            tracing::error!(%user_id, error = %e, "failed to fetch documents");
            Err(e)
        }
        Ok(documents) => {
            tracing::debug!(%user_id, count = documents.len(), "fetched documents");
            Ok(documents)
        }
    }
}

/// Validate `form` and create the document for `user_id`.
///
/// Returns the server's record; nothing is inserted locally before the backend
/// confirms.
pub async fn add_document<B: Backend>(
    backend: &B,
    user_id: Option<UserId>,
    form: &DocumentForm,
    today: NaiveDate,
) -> Result<Document, FlowError> {
    let document = form.validate(today)?;
    let user_id = user_id.ok_or(FlowError::SignedOut)?;

    let request = NewDocument::new(user_id, document);
    let saved = backend.create_document(&request).await.inspect_err(|e| {
        tracing::error!(%user_id, error = %e, "failed to save document");
    })?;
    tracing::info!(%user_id, doc_id = %saved.doc_id, "document saved");
    Ok(saved)
}

/// Delete `doc_id` on the backend. The caller removes it locally on success.
pub async fn delete_document<B: Backend>(backend: &B, doc_id: DocId) -> Result<DocId, FlowError> {
    backend.delete_document(doc_id).await.inspect_err(|e| {
        tracing::error!(%doc_id, error = %e, "failed to delete document");
    })?;
    tracing::info!(%doc_id, "document deleted");
    Ok(doc_id)
}

/// Clear the session and drop any pending load.
pub fn logout(session: &mut Session, loader: &mut DocumentLoader) -> View {
    tracing::info!(user_id = ?session.user_id(), "logging out");
    session.logout();
    loader.reset();
    View::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Call, MemoryBackend, Operation};
    use store::{DocumentType, LoadState, ValidationError};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 5, 1)
    }

    fn form(expiry: NaiveDate) -> DocumentForm {
        DocumentForm {
            document_type: Some(DocumentType::DrivingLicense),
            expiry_date: Some(expiry),
        }
    }

    fn signed_in(backend: &MemoryBackend) -> Session {
        let user_id = backend.add_user("ann", "ann@example.com", "pw");
        let mut session = Session::new();
        session.sign_in(user_id, "ann");
        session
    }

    #[tokio::test]
    async fn test_not_found_loads_empty_list() {
        let backend = MemoryBackend::new();
        let mut session = signed_in(&backend);
        let mut loader = DocumentLoader::new();
        backend.fail_next(Operation::ListDocuments, 404, Some("Not Found"));

        let ticket = loader.begin(session.user_id()).unwrap();
        let result = fetch_documents(&backend, ticket.user_id()).await;
        loader.complete(&ticket, &mut session, result).unwrap();

        assert_eq!(loader.state(), &LoadState::Loaded);
        assert!(session.documents().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_load_failure() {
        let backend = MemoryBackend::new();
        let mut session = signed_in(&backend);
        let user_id = session.user_id().unwrap();
        let kept = backend.add_document(user_id, DocumentType::Passport, date(2030, 1, 1));
        session.set_documents(vec![kept.clone()]);
        let mut loader = DocumentLoader::new();
        backend.fail_next(Operation::ListDocuments, 500, None);

        let ticket = loader.begin(session.user_id()).unwrap();
        let result = fetch_documents(&backend, ticket.user_id()).await;
        loader.complete(&ticket, &mut session, result).unwrap();

        assert!(matches!(loader.state(), LoadState::Failed(_)));
        assert_eq!(session.documents(), &[kept]);
    }

    #[tokio::test]
    async fn test_past_or_today_is_rejected_without_call() {
        let backend = MemoryBackend::new();
        let session = signed_in(&backend);

        for expiry in [today(), date(2026, 4, 30)] {
            let err = add_document(&backend, session.user_id(), &form(expiry), today())
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                FlowError::Validation(ValidationError::ExpiryNotInFuture)
            ));
        }
        let err = add_document(&backend, session.user_id(), &DocumentForm::default(), today())
            .await
            .unwrap_err();
        assert_eq!(err.user_message(SAVE_FAILED), "Please select a document and expiry date.");
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_future_date_is_submitted_and_appended() {
        let backend = MemoryBackend::new();
        let mut session = signed_in(&backend);
        let user_id = session.user_id().unwrap();

        let saved = add_document(&backend, Some(user_id), &form(date(2026, 5, 2)), today())
            .await
            .unwrap();
        session.push_document(saved.clone());

        assert_eq!(
            backend.calls(),
            vec![Call::CreateDocument(NewDocument {
                user_id,
                document_type: DocumentType::DrivingLicense,
                expiry_date: date(2026, 5, 2),
            })]
        );
        assert_eq!(session.documents(), &[saved]);
    }

    #[tokio::test]
    async fn test_save_failure_changes_nothing() {
        let backend = MemoryBackend::new();
        let session = signed_in(&backend);
        backend.fail_next(Operation::CreateDocument, 500, None);

        let err = add_document(&backend, session.user_id(), &form(date(2027, 1, 1)), today())
            .await
            .unwrap_err();
        assert_eq!(err.user_message(SAVE_FAILED), SAVE_FAILED);
        assert!(session.documents().is_empty());
        assert!(backend.documents_of(session.user_id().unwrap()).is_empty());
    }

    #[tokio::test]
    async fn test_add_without_user_is_signed_out() {
        let backend = MemoryBackend::new();
        let err = add_document(&backend, None, &form(date(2027, 1, 1)), today())
            .await
            .unwrap_err();
        assert!(matches!(err, FlowError::SignedOut));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let backend = MemoryBackend::new();
        let mut session = signed_in(&backend);
        let user_id = session.user_id().unwrap();
        for day in 1..=3 {
            backend.add_document(user_id, DocumentType::Other, date(2030, 1, day));
        }
        session.set_documents(fetch_documents(&backend, user_id).await.unwrap());
        let before = session.documents().to_vec();

        let removed = delete_document(&backend, DocId(3)).await.unwrap();
        assert!(session.remove_document(removed));

        assert_eq!(session.documents(), &before[..2]);
        assert_eq!(backend.documents_of(user_id).len(), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() {
        let backend = MemoryBackend::new();
        let mut session = signed_in(&backend);
        let user_id = session.user_id().unwrap();
        let doc = backend.add_document(user_id, DocumentType::Passport, date(2030, 1, 1));
        session.set_documents(vec![doc.clone()]);
        backend.fail_next(Operation::DeleteDocument, 500, Some("Database unavailable"));

        let err = delete_document(&backend, doc.doc_id).await.unwrap_err();
        assert_eq!(err.user_message(DELETE_FAILED), "Database unavailable");
        assert_eq!(session.documents(), &[doc]);
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut session = Session::new();
        session.sign_in(UserId(7), "ann");
        session.push_document(Document {
            doc_id: DocId(1),
            user_id: Some(UserId(7)),
            document_type: DocumentType::Passport,
            expiry_date: date(2030, 1, 1),
        });
        let mut loader = DocumentLoader::new();
        let ticket = loader.begin(session.user_id()).unwrap();

        assert_eq!(logout(&mut session, &mut loader), View::Login);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.username(), "");
        assert!(session.documents().is_empty());
        assert_eq!(loader.state(), &LoadState::Idle);
        assert!(loader
            .complete::<ApiError>(&ticket, &mut session, Ok(vec![]))
            .is_err());
    }

    #[tokio::test]
    async fn test_date_checked_against_submit_day() {
        let backend = MemoryBackend::new();
        let user_id = backend.add_user("ann", "ann@example.com", "pw");
        let mount_day = date(2026, 5, 1);
        let form = DocumentForm {
            document_type: Some(DocumentType::Passport),
            expiry_date: Some(date(2026, 5, 2)),
        };
        assert!(form.validate(mount_day).is_ok());

        let err = add_document(&backend, Some(user_id), &form, date(2026, 5, 2))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::Validation(ValidationError::ExpiryNotInFuture)
        ));
        assert!(backend.calls().is_empty());
    }
}
