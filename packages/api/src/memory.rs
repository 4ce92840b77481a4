use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use store::{DocId, Document, DocumentType, UserId};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{CreatedUser, LoginRequest, LoginResponse, NewDocument, NewUser};

/// Endpoints of [`Backend`], used to script failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    CreateUser,
    ListDocuments,
    CreateDocument,
    DeleteDocument,
}

/// A request the backend received.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(LoginRequest),
    CreateUser(NewUser),
    ListDocuments(UserId),
    CreateDocument(NewDocument),
    DeleteDocument(DocId),
}

#[derive(Clone, Debug)]
struct Account {
    user: CreatedUser,
    password: String,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: Vec<Account>,
    documents: Vec<Document>,
    next_user_id: i64,
    next_doc_id: i64,
    calls: Vec<Call>,
    failures: HashMap<Operation, (u16, Option<String>)>,
    login_response: Option<LoginResponse>,
}

/// In-memory [`Backend`] used as test support by the flow tests.
///
/// Behaves like the tracker service (duplicate emails rejected, unknown documents
/// answer 404) and records every call it receives, so tests can assert that a
/// failed validation never reached the network.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an account directly, bypassing `create_user`.
    pub fn add_user(&self, name: &str, email: &str, password: &str) -> UserId {
        let mut inner = self.lock();
        inner.next_user_id += 1;
        let user_id = UserId(inner.next_user_id);
        inner.accounts.push(Account {
            user: CreatedUser {
                user_id: Some(user_id),
                name: Some(name.to_string()),
                mobile_number: Some(String::new()),
                email: Some(email.to_string()),
            },
            password: password.to_string(),
        });
        user_id
    }

    /// Store a document directly, bypassing `create_document`.
    pub fn add_document(
        &self,
        user_id: UserId,
        document_type: DocumentType,
        expiry_date: NaiveDate,
    ) -> Document {
        let mut inner = self.lock();
        inner.next_doc_id += 1;
        let document = Document {
            doc_id: DocId(inner.next_doc_id),
            user_id: Some(user_id),
            document_type,
            expiry_date,
        };
        inner.documents.push(document.clone());
        document
    }

    /// Make the next call to `operation` fail with `status` and an optional detail.
    pub fn fail_next(&self, operation: Operation, status: u16, detail: Option<&str>) {
        self.lock()
            .failures
            .insert(operation, (status, detail.map(str::to_string)));
    }

    /// Answer every login with `response` regardless of credentials.
    pub fn set_login_response(&self, response: LoginResponse) {
        self.lock().login_response = Some(response);
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn documents_of(&self, user_id: UserId) -> Vec<Document> {
        self.lock()
            .documents
            .iter()
            .filter(|d| d.user_id == Some(user_id))
            .cloned()
            .collect()
    }

    /// Record `call` and return the scripted failure for `operation`, if any.
    fn enter(&self, operation: Operation, call: Call) -> Result<MutexGuard<'_, Inner>, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        match inner.failures.remove(&operation) {
            Some((status, detail)) => Err(ApiError::Status { status, detail }),
            None => Ok(inner),
        }
    }
}

impl Backend for MemoryBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let inner = self.enter(Operation::Login, Call::Login(request.clone()))?;
        if let Some(response) = &inner.login_response {
            return Ok(response.clone());
        }
        inner
            .accounts
            .iter()
            .find(|a| {
                a.user.name.as_deref() == Some(request.username.as_str())
                    && a.password == request.password
            })
            .map(|a| LoginResponse {
                user_id: a.user.user_id,
                name: a.user.name.clone(),
                message: Some("Login successful".to_string()),
            })
            .ok_or_else(|| ApiError::status(401, Some("Invalid username or password")))
    }

    async fn create_user(&self, request: &NewUser) -> Result<CreatedUser, ApiError> {
        let mut inner = self.enter(Operation::CreateUser, Call::CreateUser(request.clone()))?;
        if inner
            .accounts
            .iter()
            .any(|a| a.user.email.as_deref() == Some(request.email.as_str()))
        {
            return Err(ApiError::status(400, Some("Email already registered")));
        }
        inner.next_user_id += 1;
        let user = CreatedUser {
            user_id: Some(UserId(inner.next_user_id)),
            name: Some(request.name.clone()),
            mobile_number: Some(request.mobile_number.clone()),
            email: Some(request.email.clone()),
        };
        inner.accounts.push(Account {
            user: user.clone(),
            password: request.password.clone(),
        });
        Ok(user)
    }

    async fn list_documents(&self, user_id: UserId) -> Result<Vec<Document>, ApiError> {
        let inner = self.enter(Operation::ListDocuments, Call::ListDocuments(user_id))?;
        Ok(inner
            .documents
            .iter()
            .filter(|d| d.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_document(&self, request: &NewDocument) -> Result<Document, ApiError> {
        let mut inner =
            self.enter(Operation::CreateDocument, Call::CreateDocument(request.clone()))?;
        if !inner
            .accounts
            .iter()
            .any(|a| a.user.user_id == Some(request.user_id))
        {
            return Err(ApiError::status(400, Some("User does not exist")));
        }
        inner.next_doc_id += 1;
        let document = Document {
            doc_id: DocId(inner.next_doc_id),
            user_id: Some(request.user_id),
            document_type: request.document_type,
            expiry_date: request.expiry_date,
        };
        inner.documents.push(document.clone());
        Ok(document)
    }

    async fn delete_document(&self, doc_id: DocId) -> Result<(), ApiError> {
        let mut inner = self.enter(Operation::DeleteDocument, Call::DeleteDocument(doc_id))?;
        let Some(index) = inner.documents.iter().position(|d| d.doc_id == doc_id) else {
            return Err(ApiError::status(404, Some("Document not found")));
        };
        inner.documents.remove(index);
        Ok(())
    }
}
