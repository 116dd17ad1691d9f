//! Theme endpoints.
//!
//! # Design
//! - A successful list fetch rewrites the theme reference cache; every
//!   mutation invalidates it so pickers never show a deleted theme.

use crate::core::error::ApiError;
use crate::core::refcache::{invalidate_theme_cache, persist_theme_cache};
use crate::services::api::ApiClient;
use scano_api_models::{Theme, ThemePayload};
use web_sys::AbortSignal;

/// Fetch the theme list and refresh the reference cache.
pub(crate) async fn fetch_themes(
    client: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Theme>, ApiError> {
    let themes: Vec<Theme> = client.get_json("/v1/themes", signal).await?;
    let summaries: Vec<_> = themes.iter().map(Theme::summary).collect();
    persist_theme_cache(&summaries);
    Ok(themes)
}

/// Fetch one theme by id.
pub(crate) async fn fetch_theme(client: &ApiClient, id: &str) -> Result<Theme, ApiError> {
    client.get_json(&format!("/v1/themes/{id}"), None).await
}

/// Create a theme.
pub(crate) async fn create_theme(
    client: &ApiClient,
    payload: &ThemePayload,
) -> Result<Theme, ApiError> {
    let theme = client.post_json("/v1/themes", payload).await?;
    invalidate_theme_cache();
    Ok(theme)
}

/// Update a theme.
pub(crate) async fn update_theme(
    client: &ApiClient,
    id: &str,
    payload: &ThemePayload,
) -> Result<Theme, ApiError> {
    let theme = client
        .patch_json(&format!("/v1/themes/{id}"), payload)
        .await?;
    invalidate_theme_cache();
    Ok(theme)
}

/// Delete a theme.
pub(crate) async fn delete_theme(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/themes/{id}")).await?;
    invalidate_theme_cache();
    Ok(())
}
