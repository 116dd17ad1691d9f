//! HTTP client helpers (REST).
//!
//! # Design
//! - One client per app boot; the bearer token is swapped via interior
//!   mutability so callers never rebuild the client.
//! - Every helper returns [`ApiError`] so call sites share one failure
//!   taxonomy.
//! - List fetches accept an abort signal tied to component lifecycle; a
//!   request outliving its view dies instead of committing stale state.

use crate::core::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use web_sys::{AbortController, AbortSignal};

/// Cancellation handle tied to a component's lifetime.
///
/// Dropping the guard aborts whatever request still holds its signal.
pub(crate) struct AbortGuard {
    controller: Option<AbortController>,
}

impl AbortGuard {
    pub(crate) fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    pub(crate) fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Swap the bearer token used by subsequent requests.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) if !token.is_empty() => {
                request.header("Authorization", &format!("Bearer {token}"))
            }
            _ => request,
        }
    }

    async fn run(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(response.status(), &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)).abort_signal(signal));
        Self::decode(Self::run(request).await?).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::decode(Self::run(request).await?).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::decode(Self::run(request).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authorize(Request::delete(&self.url(path)));
        Self::run(request).await.map(|_| ())
    }
}
