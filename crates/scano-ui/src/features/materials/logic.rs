//! Pure pagination/selection math for the materials list.
//!
//! # Design
//! - 1-indexed pages; the page count is `ceil(len / page_size)`.
//! - Recomputing after a shrink clamps the current page into range, so
//!   deleting the last page can never strand the view.
//! - Selection always operates on the current page slice.

use std::collections::BTreeSet;

/// Page sizes offered by the materials list.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

/// Default page size for a fresh list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Selection set used for bulk material actions.
pub type SelectionSet = BTreeSet<String>;

/// Number of pages needed for `len` items at `page_size` per page.
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// Client-side pager over a fully-fetched collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    /// Current page, 1-indexed.
    pub page: usize,
    /// Items per page; one of [`PAGE_SIZES`].
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    /// Page count for a collection of `len` items.
    #[must_use]
    pub const fn pages(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    /// Pull the current page back into `1..=pages` after a resize.
    pub const fn clamp(&mut self, len: usize) {
        let pages = self.pages(len);
        if pages == 0 {
            self.page = 1;
        } else if self.page > pages {
            self.page = pages;
        }
        if self.page == 0 {
            self.page = 1;
        }
    }

    /// Switch the page size, ignoring values outside [`PAGE_SIZES`].
    pub fn set_page_size(&mut self, size: usize, len: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
        }
        self.clamp(len);
    }

    /// Advance one page; a no-op on the last page.
    pub const fn next(&mut self, len: usize) {
        if self.page < self.pages(len) {
            self.page += 1;
        }
    }

    /// Go back one page; a no-op on the first page.
    pub const fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// The slice of `items` visible on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page.saturating_sub(1)).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Toggle the presence of an id in the selection set.
#[must_use]
pub fn toggle_selection(selected: &SelectionSet, id: &str) -> SelectionSet {
    let mut next = selected.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Select the current page slice, or clear when it is already fully selected.
#[must_use]
pub fn select_page_or_clear(selected: &SelectionSet, page_ids: &[String]) -> SelectionSet {
    let all_selected =
        !page_ids.is_empty() && page_ids.iter().all(|id| selected.contains(id));
    if all_selected {
        SelectionSet::new()
    } else {
        page_ids.iter().cloned().collect()
    }
}

/// Build the materials list path for a theme, with optional query filters.
#[must_use]
pub fn materials_path(
    theme_id: &str,
    search: &str,
    tone: Option<scano_api_models::SentimentLabel>,
) -> String {
    let mut path = format!("/v1/themes/{theme_id}/materials");
    let mut separator = '?';
    let query = search.trim();
    if !query.is_empty() {
        path.push(separator);
        path.push_str("search=");
        path.push_str(&urlencoding::encode(query));
        separator = '&';
    }
    if let Some(tone) = tone {
        path.push(separator);
        path.push_str("tone=");
        path.push_str(tone.as_str());
    }
    path
}

/// Aggregated result of a bulk delete: one request per id, no rollback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Ids whose delete request succeeded.
    pub deleted: Vec<String>,
    /// Ids whose delete request failed; they stay selected.
    pub failed: Vec<String>,
}

impl BulkOutcome {
    /// Whether every delete went through.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BulkOutcome, PAGE_SIZES, Pager, SelectionSet, page_count, select_page_or_clear,
        toggle_selection,
    };

    #[test]
    fn page_count_is_ceil_for_every_offered_size() {
        for size in PAGE_SIZES {
            assert_eq!(page_count(0, size), 0);
            assert_eq!(page_count(1, size), 1);
            assert_eq!(page_count(size, size), 1);
            assert_eq!(page_count(size + 1, size), 2);
            assert_eq!(page_count(12, size), 12usize.div_ceil(size));
        }
    }

    #[test]
    fn twelve_items_at_size_five_make_three_pages() {
        let items: Vec<usize> = (0..12).collect();
        let mut pager = Pager {
            page: 1,
            page_size: 5,
        };
        assert_eq!(pager.pages(items.len()), 3);
        pager.next(items.len());
        pager.next(items.len());
        assert_eq!(pager.page, 3);
        assert_eq!(pager.slice(&items), &[10, 11]);
    }

    #[test]
    fn prev_on_first_and_next_on_last_are_no_ops() {
        let mut pager = Pager {
            page: 1,
            page_size: 5,
        };
        pager.prev();
        assert_eq!(pager.page, 1);
        pager.page = 3;
        pager.next(12);
        assert_eq!(pager.page, 3);
    }

    #[test]
    fn shrinking_the_collection_clamps_the_page() {
        let mut pager = Pager {
            page: 3,
            page_size: 5,
        };
        // The last page was deleted out from under the view.
        pager.clamp(10);
        assert_eq!(pager.page, 2);
        pager.clamp(0);
        assert_eq!(pager.page, 1);
    }

    #[test]
    fn page_size_change_recomputes_and_clamps() {
        let mut pager = Pager {
            page: 3,
            page_size: 5,
        };
        pager.set_page_size(20, 12);
        assert_eq!(pager.page_size, 20);
        assert_eq!(pager.page, 1);
        pager.set_page_size(7, 12);
        assert_eq!(pager.page_size, 20, "sizes outside the fixed set are ignored");
    }

    #[test]
    fn select_all_takes_exactly_the_page_slice() {
        let ids: Vec<String> = (0..12).map(|n| format!("m{n}")).collect();
        let pager = Pager {
            page: 3,
            page_size: 5,
        };
        let page_ids = pager.slice(&ids).to_vec();
        let selected = select_page_or_clear(&SelectionSet::new(), &page_ids);
        assert_eq!(selected.len(), 12usize.saturating_sub(10).min(5));
        assert!(selected.contains("m10") && selected.contains("m11"));

        let cleared = select_page_or_clear(&selected, &page_ids);
        assert!(cleared.is_empty());
        assert!(select_page_or_clear(&SelectionSet::new(), &[]).is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let one = toggle_selection(&SelectionSet::new(), "m1");
        assert!(one.contains("m1"));
        assert!(toggle_selection(&one, "m1").is_empty());
    }

    #[test]
    fn materials_path_encodes_filters() {
        use scano_api_models::SentimentLabel;
        assert_eq!(
            super::materials_path("64f1c2", "", None),
            "/v1/themes/64f1c2/materials"
        );
        assert_eq!(
            super::materials_path("64f1c2", "air astana", None),
            "/v1/themes/64f1c2/materials?search=air%20astana"
        );
        assert_eq!(
            super::materials_path("64f1c2", "акимат", Some(SentimentLabel::Negative)),
            format!(
                "/v1/themes/64f1c2/materials?search={}&tone=negative",
                urlencoding::encode("акимат")
            )
        );
    }

    #[test]
    fn bulk_outcome_reports_partial_failures() {
        let outcome = BulkOutcome {
            deleted: vec!["m1".to_string(), "m2".to_string()],
            failed: vec!["m3".to_string()],
        };
        assert!(!outcome.is_clean());
        assert!(BulkOutcome::default().is_clean());
    }
}
