//! # ApiClient — the single configured HTTP client
//!
//! Everything the app sends to the backend goes through one [`ApiClient`]:
//! fixed base URL, default `Content-Type: application/json`, bounded
//! per-request timeout, and the bearer token slot the session manager
//! controls.
//!
//! ## Hooks
//!
//! - **Outbound** ([`ApiClient::execute`], request side): attaches
//!   `Authorization: Bearer <token>` when a token is set and logs the call.
//!   This is the *only* place the authorization header is written; resource
//!   services never touch it.
//! - **Inbound** ([`ApiClient::execute`], response side): classifies every
//!   failure into an [`ApiError`] before it propagates, so screens can give
//!   differentiated feedback without inspecting transport internals.
//!
//! ## Sharing
//!
//! `ApiClient` is `Clone`; clones share the token slot. The session manager
//! holds one clone and is the single writer, every other holder only reads.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Configured HTTP client for the FridgeChef backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Build a client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.backend.timeout_secs))
            .build()
            .map_err(|e| ApiError::Other(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.backend.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Set or clear the bearer token attached to every request.
    ///
    /// Written only by the session manager; clones of this client observe the
    /// change immediately.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().unwrap().clone();
        match token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send a request and classify any failure.
    async fn execute(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(method, path, "api request");

        let response = self.authorize(request).send().await.map_err(|e| {
            let err = ApiError::from_transport(e);
            tracing::warn!(method, path, error = %err, "api request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(method, path, status = status.as_u16(), "api request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// GET `path` and parse the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute("GET", path, self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    /// POST a JSON body to `path` and parse the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.execute("POST", path, request).await?;
        Self::decode(response).await
    }

    /// PUT a JSON body to `path` and parse the JSON response.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.put(self.url(path)).json(body);
        let response = self.execute("PUT", path, request).await?;
        Self::decode(response).await
    }

    /// DELETE `path`, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute("DELETE", path, self.http.delete(self.url(path)))
            .await?;
        Ok(())
    }

    /// POST a multipart form to `path` and parse the JSON response.
    ///
    /// The form supplies its own content type, overriding the JSON default.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(path)).multipart(form);
        let response = self.execute("POST", path, request).await?;
        Self::decode(response).await
    }

    /// PUT a multipart form to `path` and parse the JSON response.
    pub async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let request = self.http.put(self.url(path)).multipart(form);
        let response = self.execute("PUT", path, request).await?;
        Self::decode(response).await
    }
}
