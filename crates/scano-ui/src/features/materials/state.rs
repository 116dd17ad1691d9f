//! Materials list models and pure state transformations.

use crate::features::materials::logic::{BulkOutcome, Pager, SelectionSet};
use chrono::{DateTime, Utc};
use scano_api_models::{Material, SentimentLabel, SourceKind};
use std::collections::HashMap;
use std::rc::Rc;

/// UI-friendly material snapshot used across list/state helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialRow {
    /// Stable material id.
    pub id: String,
    /// Material headline.
    pub title: String,
    /// Short body excerpt for the card.
    pub snippet: String,
    /// Canonical URL of the content.
    pub url: String,
    /// Source display name.
    pub source_name: String,
    /// Source channel class.
    pub source_kind: SourceKind,
    /// Current tone; operator edits stay client-local until saved.
    pub tone: SentimentLabel,
    /// Operator-applied tags.
    pub tags: Vec<String>,
    /// Lead image URL, when extracted.
    pub image: Option<String>,
    /// Favourite flag; client-local only.
    pub favourite: bool,
    /// Indexing timestamp shown on the card.
    pub indexed_at: String,
}

const SNIPPET_MAX_CHARS: usize = 280;

impl From<Material> for MaterialRow {
    fn from(value: Material) -> Self {
        Self {
            id: value.id,
            title: value.title,
            snippet: snippet_of(&value.description),
            url: value.url,
            source_name: value.source.name,
            source_kind: value.source.kind,
            tone: value.sentiment,
            tags: value.tags,
            image: value.image,
            favourite: false,
            indexed_at: format_stamp(value.created_at),
        }
    }
}

fn snippet_of(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= SNIPPET_MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{cut}…")
}

fn format_stamp(stamp: DateTime<Utc>) -> String {
    stamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Filter state for the materials list; drives the server query.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MaterialFilters {
    /// Search query string.
    pub search: String,
    /// Optional tone filter.
    pub tone: Option<SentimentLabel>,
}

/// Materials slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MaterialsState {
    /// Map of material rows by id.
    pub by_id: HashMap<String, Rc<MaterialRow>>,
    /// Ordered list of visible material ids.
    pub visible_ids: Vec<String>,
    /// Multi-select set for bulk actions.
    pub selected: SelectionSet,
    /// Client-side pager over the fetched collection.
    pub pager: Pager,
    /// Active filter state used for fetching.
    pub filters: MaterialFilters,
    /// Whether the list fetch is in flight.
    pub pending: bool,
    /// Last list-load failure, surfaced inline.
    pub error: Option<String>,
}

/// Replace list rows with a new snapshot, pruning selection and clamping the pager.
pub fn set_rows(state: &mut MaterialsState, rows: Vec<MaterialRow>) {
    state.visible_ids = rows.iter().map(|row| row.id.clone()).collect();
    state.by_id = rows
        .into_iter()
        .map(|row| (row.id.clone(), Rc::new(row)))
        .collect();
    state.selected.retain(|id| state.by_id.contains_key(id));
    state.pager.clamp(state.visible_ids.len());
}

/// Remove one material row, keeping pager and selection consistent.
pub fn remove_row(state: &mut MaterialsState, id: &str) {
    state.by_id.remove(id);
    state.visible_ids.retain(|row_id| row_id != id);
    state.selected.remove(id);
    state.pager.clamp(state.visible_ids.len());
}

/// Apply a bulk delete outcome: drop deleted rows, keep failed ids selected.
pub fn apply_bulk_outcome(state: &mut MaterialsState, outcome: &BulkOutcome) {
    for id in &outcome.deleted {
        state.by_id.remove(id);
        state.visible_ids.retain(|row_id| row_id != id);
    }
    state
        .selected
        .retain(|id| outcome.failed.iter().any(|failed| failed == id));
    state.pager.clamp(state.visible_ids.len());
}

/// Re-tone a row after an operator edit (client-local until saved).
pub fn set_tone(state: &mut MaterialsState, id: &str, tone: SentimentLabel) {
    let Some(current) = state.by_id.get(id) else {
        return;
    };
    let mut next = (**current).clone();
    next.tone = tone;
    state.by_id.insert(id.to_string(), Rc::new(next));
}

/// Flip the client-local favourite flag on a row.
pub fn toggle_favourite(state: &mut MaterialsState, id: &str) {
    let Some(current) = state.by_id.get(id) else {
        return;
    };
    let mut next = (**current).clone();
    next.favourite = !next.favourite;
    state.by_id.insert(id.to_string(), Rc::new(next));
}

/// Ids on the current page, in list order.
#[must_use]
pub fn page_ids(state: &MaterialsState) -> Vec<String> {
    state.pager.slice(&state.visible_ids).to_vec()
}

/// Rows on the current page, in list order.
#[must_use]
pub fn page_rows(state: &MaterialsState) -> Vec<Rc<MaterialRow>> {
    state
        .pager
        .slice(&state.visible_ids)
        .iter()
        .filter_map(|id| state.by_id.get(id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::materials::logic::{BulkOutcome, select_page_or_clear};
    use chrono::TimeZone;
    use scano_api_models::{Material, MaterialSource, SentimentLabel, SourceKind};

    fn material(id: &str) -> Material {
        Material {
            id: id.to_string(),
            theme_id: "t1".to_string(),
            title: format!("headline {id}"),
            description: "body".to_string(),
            url: format!("https://example.kz/{id}"),
            source: MaterialSource {
                name: "Tengrinews".to_string(),
                url: "https://tengrinews.kz".to_string(),
                kind: SourceKind::News,
            },
            sentiment: SentimentLabel::Neutral,
            tags: vec![],
            image: None,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap(),
            published_at: None,
        }
    }

    fn seeded(count: usize) -> MaterialsState {
        let mut state = MaterialsState::default();
        let rows = (0..count)
            .map(|n| MaterialRow::from(material(&format!("m{n}"))))
            .collect();
        set_rows(&mut state, rows);
        state
    }

    #[test]
    fn row_conversion_formats_the_stamp() {
        let row = MaterialRow::from(material("m1"));
        assert_eq!(row.indexed_at, "2024-05-17 09:30");
        assert_eq!(row.source_kind, SourceKind::News);
        assert!(!row.favourite);
    }

    #[test]
    fn long_descriptions_are_cut_to_a_snippet() {
        let mut raw = material("m1");
        raw.description = "х".repeat(400);
        let row = MaterialRow::from(raw);
        assert_eq!(row.snippet.chars().count(), 281);
        assert!(row.snippet.ends_with('…'));
    }

    #[test]
    fn snapshot_replacement_prunes_selection_and_clamps() {
        let mut state = seeded(12);
        state.pager.page_size = 5;
        state.pager.page = 3;
        state.selected = select_page_or_clear(&state.selected, &page_ids(&state));
        assert_eq!(state.selected.len(), 2);

        // The refetch comes back one page shorter.
        let rows = (0..5)
            .map(|n| MaterialRow::from(material(&format!("m{n}"))))
            .collect();
        set_rows(&mut state, rows);
        assert_eq!(state.pager.page, 1);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn bulk_outcome_keeps_failed_ids_selected() {
        let mut state = seeded(3);
        state.selected = ["m0", "m1", "m2"].iter().map(ToString::to_string).collect();
        let outcome = BulkOutcome {
            deleted: vec!["m0".to_string(), "m2".to_string()],
            failed: vec!["m1".to_string()],
        };
        apply_bulk_outcome(&mut state, &outcome);
        assert_eq!(state.visible_ids, vec!["m1".to_string()]);
        assert_eq!(state.selected.len(), 1);
        assert!(state.selected.contains("m1"));
    }

    #[test]
    fn tone_edits_stay_local_to_the_row() {
        let mut state = seeded(2);
        set_tone(&mut state, "m0", SentimentLabel::Negative);
        assert_eq!(state.by_id["m0"].tone, SentimentLabel::Negative);
        assert_eq!(state.by_id["m1"].tone, SentimentLabel::Neutral);
        set_tone(&mut state, "missing", SentimentLabel::Positive);
    }

    #[test]
    fn favourite_toggle_flips_one_row() {
        let mut state = seeded(1);
        toggle_favourite(&mut state, "m0");
        assert!(state.by_id["m0"].favourite);
        toggle_favourite(&mut state, "m0");
        assert!(!state.by_id["m0"].favourite);
    }

    #[test]
    fn page_rows_follow_the_pager() {
        let mut state = seeded(12);
        state.pager.page_size = 5;
        state.pager.page = 3;
        let rows = page_rows(&state);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "m10");
    }
}
