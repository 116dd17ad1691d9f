//! Theme-list reference cache backed by local storage.
//!
//! Several unrelated forms (rules, users, notification and subscription
//! editors) need a theme picker without refetching the list. The cache is a
//! versioned envelope so stale schemas fail closed, and every theme mutation
//! invalidates it.

use scano_api_models::ThemeSummary;
use serde::{Deserialize, Serialize};

/// Local-storage key holding the cached theme list.
pub const THEME_LIST_KEY: &str = "themeList";

/// Envelope schema version; bump when [`ThemeSummary`] changes shape.
pub const CACHE_VERSION: u32 = 1;

/// Versioned envelope persisted under [`THEME_LIST_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeListCache {
    /// Envelope schema version.
    pub version: u32,
    /// Unix milliseconds when the list was written.
    pub saved_at_ms: i64,
    /// Theme summaries as fetched.
    pub themes: Vec<ThemeSummary>,
}

/// Serialize an envelope around the fetched list.
#[must_use]
pub fn encode(themes: &[ThemeSummary], saved_at_ms: i64) -> String {
    let cache = ThemeListCache {
        version: CACHE_VERSION,
        saved_at_ms,
        themes: themes.to_vec(),
    };
    serde_json::to_string(&cache).unwrap_or_default()
}

/// Decode a cached envelope, failing closed on any mismatch.
#[must_use]
pub fn decode(raw: &str) -> Option<Vec<ThemeSummary>> {
    let cache: ThemeListCache = serde_json::from_str(raw).ok()?;
    (cache.version == CACHE_VERSION).then_some(cache.themes)
}

/// Read the cached list, if a current-version envelope is present.
#[cfg(target_arch = "wasm32")]
pub(crate) fn load_theme_cache() -> Option<Vec<ThemeSummary>> {
    use gloo::storage::{LocalStorage, Storage};
    let raw = LocalStorage::get::<String>(THEME_LIST_KEY).ok()?;
    decode(&raw)
}

/// Overwrite the cache after a successful theme-list fetch.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn persist_theme_cache(themes: &[ThemeSummary]) {
    use gloo::storage::{LocalStorage, Storage};
    let raw = encode(themes, js_sys::Date::now() as i64);
    if let Err(err) = LocalStorage::set(THEME_LIST_KEY, raw) {
        gloo::console::error!("theme cache write failed", err.to_string());
    }
}

/// Drop the cache after any theme mutation.
#[cfg(target_arch = "wasm32")]
pub(crate) fn invalidate_theme_cache() {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::delete(THEME_LIST_KEY);
}

#[cfg(test)]
mod tests {
    use super::{CACHE_VERSION, ThemeListCache, decode, encode};
    use scano_api_models::ThemeSummary;

    fn sample() -> Vec<ThemeSummary> {
        vec![ThemeSummary {
            id: "t1".to_string(),
            name: "Almaty".to_string(),
        }]
    }

    #[test]
    fn envelope_round_trips_the_fetched_list() {
        let themes = sample();
        let decoded = decode(&encode(&themes, 1_700_000_000_000)).expect("cache decodes");
        assert_eq!(decoded, themes);
    }

    #[test]
    fn cached_themes_serialize_with_wire_field_names() {
        let raw = encode(&sample(), 0);
        assert!(raw.contains(r#"[{"_id":"t1","name":"Almaty"}]"#));
    }

    #[test]
    fn version_mismatch_fails_closed() {
        let stale = ThemeListCache {
            version: CACHE_VERSION + 1,
            saved_at_ms: 0,
            themes: sample(),
        };
        let raw = serde_json::to_string(&stale).expect("encode");
        assert!(decode(&raw).is_none());
        assert!(decode("not json").is_none());
    }
}
