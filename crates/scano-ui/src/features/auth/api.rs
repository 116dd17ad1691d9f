//! Auth endpoints.

use crate::core::error::ApiError;
use crate::services::api::ApiClient;
use scano_api_models::{LoginRequest, LoginResponse, UserProfile};

/// Exchange credentials for a bearer token.
pub(crate) async fn login(
    client: &ApiClient,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    client.post_json("/v1/auth/login", request).await
}

/// Fetch the profile behind the current bearer token.
pub(crate) async fn fetch_profile(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json("/v1/auth/me", None).await
}
