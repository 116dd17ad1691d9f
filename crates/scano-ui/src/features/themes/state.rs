//! Theme list state held in the app store.

use scano_api_models::{Theme, ThemeSummary};
use std::rc::Rc;

/// Themes slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemesState {
    /// Fetched themes in server order.
    pub themes: Vec<Rc<Theme>>,
    /// Whether the list fetch is in flight.
    pub pending: bool,
    /// Last list-load failure, surfaced inline.
    pub error: Option<String>,
}

/// Replace the theme list with a fresh snapshot.
pub fn set_themes(state: &mut ThemesState, themes: Vec<Theme>) {
    state.themes = themes.into_iter().map(Rc::new).collect();
    state.pending = false;
    state.error = None;
}

/// Drop one theme from the list after a delete.
pub fn remove_theme(state: &mut ThemesState, id: &str) {
    state.themes.retain(|theme| theme.id != id);
}

/// Find a theme by id.
#[must_use]
pub fn theme_by_id(state: &ThemesState, id: &str) -> Option<Rc<Theme>> {
    state.themes.iter().find(|theme| theme.id == id).cloned()
}

/// Compact snapshots for pickers and the reference cache.
#[must_use]
pub fn summaries(state: &ThemesState) -> Vec<ThemeSummary> {
    state.themes.iter().map(|theme| theme.summary()).collect()
}

#[cfg(test)]
mod tests {
    use super::{ThemesState, remove_theme, set_themes, summaries, theme_by_id};
    use scano_api_models::{Theme, ThemeKind};

    fn theme(id: &str, name: &str) -> Theme {
        Theme {
            id: id.to_string(),
            name: name.to_string(),
            kind: ThemeKind::Keywords,
            keywords: vec![name.to_lowercase()],
            minus_keywords: vec![],
            source_kinds: vec![],
            material_kinds: vec![],
            search_domains: vec![],
            language: None,
            excluded_sources: vec![],
            counters: scano_api_models::ThemeCounters::default(),
        }
    }

    #[test]
    fn snapshot_replaces_and_clears_flags() {
        let mut state = ThemesState {
            pending: true,
            error: Some("old".to_string()),
            ..ThemesState::default()
        };
        set_themes(&mut state, vec![theme("t1", "Almaty"), theme("t2", "Astana")]);
        assert_eq!(state.themes.len(), 2);
        assert!(!state.pending);
        assert!(state.error.is_none());
        assert_eq!(theme_by_id(&state, "t2").map(|t| t.name.clone()).as_deref(), Some("Astana"));
    }

    #[test]
    fn removal_and_summaries_stay_in_sync() {
        let mut state = ThemesState::default();
        set_themes(&mut state, vec![theme("t1", "Almaty"), theme("t2", "Astana")]);
        remove_theme(&mut state, "t1");
        let summaries = summaries(&state);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "t2");
    }
}
