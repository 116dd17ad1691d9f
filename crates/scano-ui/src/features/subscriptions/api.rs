//! Report subscription endpoints.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use scano_api_models::{Subscription, SubscriptionPayload};
use web_sys::AbortSignal;

pub(crate) async fn fetch_subscriptions(
    client: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Subscription>, ApiError> {
    client.get_json("/v1/subscriptions", signal).await
}

/// Fetch one subscription by id; edit routes refetch instead of passing row data.
pub(crate) async fn fetch_subscription(
    client: &ApiClient,
    id: &str,
) -> Result<Subscription, ApiError> {
    client.get_json(&format!("/v1/subscriptions/{id}"), None).await
}

pub(crate) async fn create_subscription(
    client: &ApiClient,
    payload: &SubscriptionPayload,
) -> Result<Subscription, ApiError> {
    client.post_json("/v1/subscriptions", payload).await
}

pub(crate) async fn update_subscription(
    client: &ApiClient,
    id: &str,
    payload: &SubscriptionPayload,
) -> Result<Subscription, ApiError> {
    client
        .patch_json(&format!("/v1/subscriptions/{id}"), payload)
        .await
}

pub(crate) async fn delete_subscription(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/subscriptions/{id}")).await
}
