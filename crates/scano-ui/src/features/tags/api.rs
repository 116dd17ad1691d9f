//! Tag endpoints.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use scano_api_models::{Tag, TagPayload};
use web_sys::AbortSignal;

pub(crate) async fn fetch_tags(
    client: &ApiClient,
    theme_id: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Tag>, ApiError> {
    client
        .get_json(&format!("/v1/themes/{theme_id}/tags"), signal)
        .await
}

pub(crate) async fn create_tag(client: &ApiClient, payload: &TagPayload) -> Result<Tag, ApiError> {
    client.post_json("/v1/tags", payload).await
}

pub(crate) async fn update_tag(
    client: &ApiClient,
    id: &str,
    payload: &TagPayload,
) -> Result<Tag, ApiError> {
    client.patch_json(&format!("/v1/tags/{id}"), payload).await
}

pub(crate) async fn delete_tag(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/tags/{id}")).await
}
