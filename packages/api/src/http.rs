//! [`Backend`] over HTTP with `reqwest`.
//!
//! On wasm32 reqwest goes through the browser's `fetch`. No timeout is configured;
//! a stalled request only ends when the transport gives up.

use serde::de::DeserializeOwned;
use store::{ClientConfig, DocId, Document, UserId};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    CreatedUser, ErrorBody, LoginRequest, LoginResponse, NewDocument, NewUser,
};

/// Client for the tracker REST backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send `request` and check the status, turning error bodies into [`ApiError::Status`].
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // The error body is best effort; a missing or non-JSON body just has no detail.
        let detail = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::into_detail),
            Err(_) => None,
        };
        tracing::debug!(status = status.as_u16(), ?detail, "backend error response");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Backend for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(self.client.post(self.url("/login")).json(request))
            .await
    }

    async fn create_user(&self, request: &NewUser) -> Result<CreatedUser, ApiError> {
        self.send_json(self.client.post(self.url("/users")).json(request))
            .await
    }

    async fn list_documents(&self, user_id: UserId) -> Result<Vec<Document>, ApiError> {
        let url = self.url(&format!("/documents/user/{user_id}"));
        self.send_json(self.client.get(url)).await
    }

    async fn create_document(&self, request: &NewDocument) -> Result<Document, ApiError> {
        self.send_json(self.client.post(self.url("/documents")).json(request))
            .await
    }

    async fn delete_document(&self, doc_id: DocId) -> Result<(), ApiError> {
        let url = self.url(&format!("/documents/{doc_id}"));
        // Body is ignored.
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }
}
