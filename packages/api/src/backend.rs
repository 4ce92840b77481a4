//! # Backend trait
//!
//! One async method per REST endpoint the client consumes:
//!
//! | Method | HTTP |
//! |--------|------|
//! | [`login`](Backend::login) | `POST /login` |
//! | [`create_user`](Backend::create_user) | `POST /users` |
//! | [`list_documents`](Backend::list_documents) | `GET /documents/user/{user_id}` |
//! | [`create_document`](Backend::create_document) | `POST /documents` |
//! | [`delete_document`](Backend::delete_document) | `DELETE /documents/{doc_id}` |
//!
//! Implementations report non-2xx answers as [`ApiError::Status`] and leave the
//! interpretation (for instance, 404 on a list meaning "no documents yet") to the
//! flows. [`crate::HttpBackend`] talks to the real service; [`crate::MemoryBackend`]
//! keeps everything in process for tests.

use std::future::Future;

use store::{DocId, Document, UserId};

use crate::error::ApiError;
use crate::models::{CreatedUser, LoginRequest, LoginResponse, NewDocument, NewUser};

pub trait Backend {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn create_user(
        &self,
        request: &NewUser,
    ) -> impl Future<Output = Result<CreatedUser, ApiError>>;
    fn list_documents(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Document>, ApiError>>;
    fn create_document(
        &self,
        request: &NewDocument,
    ) -> impl Future<Output = Result<Document, ApiError>>;
    fn delete_document(
        &self,
        doc_id: DocId,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
