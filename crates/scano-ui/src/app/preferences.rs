//! Persistence and environment helpers for the app shell.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

/// Local-storage override for the API base URL (ops/dev escape hatch).
pub(crate) const API_BASE_KEY: &str = "scano.api_base";

/// Resolve the API base URL for this boot.
///
/// Defaults to the serving origin, remapping the dev server port to the API
/// port so `trunk serve` works against a local backend.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }

    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:7070".to_string()
}
