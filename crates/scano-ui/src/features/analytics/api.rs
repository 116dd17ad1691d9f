//! Analytics aggregate endpoints.

use crate::core::error::ApiError;
use crate::features::analytics::logic::AggregateKind;
use crate::services::api::ApiClient;
use scano_api_models::NameValue;
use web_sys::AbortSignal;

/// Fetch one server-computed aggregate for a theme.
pub(crate) async fn fetch_aggregate(
    client: &ApiClient,
    theme_id: &str,
    kind: AggregateKind,
    signal: Option<&AbortSignal>,
) -> Result<Vec<NameValue>, ApiError> {
    client.get_json(&kind.path(theme_id), signal).await
}
