//! User administration endpoints.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use scano_api_models::{User, UserPayload};
use web_sys::AbortSignal;

pub(crate) async fn fetch_users(
    client: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<Vec<User>, ApiError> {
    client.get_json("/v1/users", signal).await
}

/// Fetch one account by id; edit routes refetch instead of passing row data.
pub(crate) async fn fetch_user(client: &ApiClient, id: &str) -> Result<User, ApiError> {
    client.get_json(&format!("/v1/users/{id}"), None).await
}

pub(crate) async fn create_user(
    client: &ApiClient,
    payload: &UserPayload,
) -> Result<User, ApiError> {
    client.post_json("/v1/users", payload).await
}

pub(crate) async fn update_user(
    client: &ApiClient,
    id: &str,
    payload: &UserPayload,
) -> Result<User, ApiError> {
    client.patch_json(&format!("/v1/users/{id}"), payload).await
}

pub(crate) async fn delete_user(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/users/{id}")).await
}
