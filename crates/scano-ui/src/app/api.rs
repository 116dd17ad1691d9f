//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Update the bearer token via interior mutability to avoid rebuilding
//!   clients (and re-running every effect keyed on the context).

use crate::app::preferences::api_base_url;
use crate::services::api::ApiClient;
use std::rc::Rc;
use yew::prelude::*;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Grab the shared client, falling back to a fresh one outside the provider.
#[hook]
pub(crate) fn use_api() -> ApiCtx {
    use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()))
}
