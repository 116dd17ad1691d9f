//! Uniform failure type returned by every fetcher.
//!
//! # Design
//! - One taxonomy for transport, HTTP-status, and decode failures so the
//!   presentation layer has a single policy for surfacing them.
//! - Non-2xx bodies are probed for an RFC9457 problem document before falling
//!   back to a generic per-status message.

use scano_api_models::ProblemDetails;

/// Failure reported by an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable failure summary.
        message: String,
    },
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ProblemDetails>(body)
            .ok()
            .map_or_else(
                || default_status_message(status).to_string(),
                |problem| problem.detail.unwrap_or(problem.title),
            );
        Self::Status { status, message }
    }

    /// Whether the failure means the bearer token was rejected.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Whether the request was cancelled by an abort guard; callers skip
    /// state updates for these instead of surfacing them.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        match self {
            Self::Network(message) => message.to_ascii_lowercase().contains("abort"),
            Self::Status { .. } | Self::Decode(_) => false,
        }
    }
}

fn default_status_message(status: u16) -> &'static str {
    match status {
        400 => "invalid request",
        401 => "authentication required",
        403 => "access denied",
        404 => "not found",
        409 => "conflicting state",
        500..=599 => "server error",
        _ => "request failed",
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn problem_detail_wins_over_generic_message() {
        let body = r#"{"type":"about:blank","title":"Bad Request","status":400,"detail":"name is required"}"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "name is required".to_string()
            }
        );
    }

    #[test]
    fn problem_title_used_when_detail_missing() {
        let body = r#"{"title":"Conflict","status":409}"#;
        let err = ApiError::from_response(409, body);
        assert_eq!(
            err,
            ApiError::Status {
                status: 409,
                message: "Conflict".to_string()
            }
        );
    }

    #[test]
    fn aborts_are_recognized_from_the_transport_message() {
        assert!(ApiError::Network("AbortError: The user aborted a request.".to_string()).is_aborted());
        assert!(!ApiError::Network("dns failure".to_string()).is_aborted());
        assert!(!ApiError::from_response(500, "").is_aborted());
    }

    #[test]
    fn garbage_bodies_fall_back_per_status() {
        assert_eq!(
            ApiError::from_response(401, "<html>"),
            ApiError::Status {
                status: 401,
                message: "authentication required".to_string()
            }
        );
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::from_response(500, "").is_unauthorized());
    }
}
