//! Notification plan endpoints.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use scano_api_models::{NotificationPayload, NotificationPlan};
use web_sys::AbortSignal;

pub(crate) async fn fetch_plans(
    client: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<Vec<NotificationPlan>, ApiError> {
    client.get_json("/v1/notifications", signal).await
}

/// Fetch one plan by id; edit routes refetch instead of passing row data.
pub(crate) async fn fetch_plan(
    client: &ApiClient,
    id: &str,
) -> Result<NotificationPlan, ApiError> {
    client.get_json(&format!("/v1/notifications/{id}"), None).await
}

pub(crate) async fn create_plan(
    client: &ApiClient,
    payload: &NotificationPayload,
) -> Result<NotificationPlan, ApiError> {
    client.post_json("/v1/notifications", payload).await
}

pub(crate) async fn update_plan(
    client: &ApiClient,
    id: &str,
    payload: &NotificationPayload,
) -> Result<NotificationPlan, ApiError> {
    client
        .patch_json(&format!("/v1/notifications/{id}"), payload)
        .await
}

pub(crate) async fn delete_plan(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/notifications/{id}")).await
}
