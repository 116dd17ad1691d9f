//! Material endpoints.

use crate::core::error::ApiError;
use crate::features::materials::logic::{BulkOutcome, materials_path};
use crate::features::materials::state::{MaterialFilters, MaterialRow};
use crate::services::api::ApiClient;
use scano_api_models::{Material, MaterialPatch, SentimentLabel};
use web_sys::AbortSignal;

/// Fetch the materials of a theme as list rows.
pub(crate) async fn fetch_materials(
    client: &ApiClient,
    theme_id: &str,
    filters: &MaterialFilters,
    signal: Option<&AbortSignal>,
) -> Result<Vec<MaterialRow>, ApiError> {
    let data: Vec<Material> = client
        .get_json(&materials_path(theme_id, &filters.search, filters.tone), signal)
        .await?;
    Ok(data.into_iter().map(MaterialRow::from).collect())
}

/// Persist an operator tone edit.
pub(crate) async fn save_tone(
    client: &ApiClient,
    id: &str,
    tone: SentimentLabel,
) -> Result<(), ApiError> {
    let patch = MaterialPatch {
        sentiment: Some(tone),
        tags: None,
    };
    client
        .patch_json::<Material, _>(&format!("/v1/materials/{id}"), &patch)
        .await
        .map(|_| ())
}

/// Delete one material.
pub(crate) async fn delete_material(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/v1/materials/{id}")).await
}

/// Delete every selected material, one request per id.
///
/// There is no batch endpoint; failures are collected rather than rolled
/// back, and the caller reports them.
pub(crate) async fn bulk_delete(client: &ApiClient, ids: &[String]) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();
    for id in ids {
        match delete_material(client, id).await {
            Ok(()) => outcome.deleted.push(id.clone()),
            Err(_) => outcome.failed.push(id.clone()),
        }
    }
    outcome
}
