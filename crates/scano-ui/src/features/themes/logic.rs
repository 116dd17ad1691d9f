//! Theme form parsing and validation.
//!
//! # Design
//! - Keep form inputs as raw strings for lossless editing.
//! - Convert to shared API types only on save.
//! - Term lists accept both comma- and newline-separated input.

use scano_api_models::{MaterialKind, SearchDomain, SourceKind, Theme, ThemeKind, ThemePayload};

/// Parse a comma/newline separated term list; drops empties, keeps order.
#[must_use]
pub fn parse_term_list(raw: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in raw.split([',', '\n']) {
        let trimmed = term.trim();
        if !trimmed.is_empty() && !terms.iter().any(|seen| seen == trimmed) {
            terms.push(trimmed.to_string());
        }
    }
    terms
}

/// Join a term list back into editable text.
#[must_use]
pub fn join_term_list(terms: &[String]) -> String {
    terms.join(", ")
}

/// Mutable theme editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeFormState {
    /// Theme display name.
    pub name: String,
    /// What the theme monitors.
    pub kind: ThemeKind,
    /// Raw keyword list input.
    pub keywords: String,
    /// Raw minus-keyword list input.
    pub minus_keywords: String,
    /// Enabled source channel classes.
    pub source_kinds: Vec<SourceKind>,
    /// Enabled material classes.
    pub material_kinds: Vec<MaterialKind>,
    /// Enabled search domains.
    pub search_domains: Vec<SearchDomain>,
    /// Raw language filter input (ISO 639-1 or empty).
    pub language: String,
    /// Raw excluded-source list input.
    pub excluded_sources: String,
}

impl Default for ThemeFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ThemeKind::Keywords,
            keywords: String::new(),
            minus_keywords: String::new(),
            source_kinds: vec![SourceKind::Social, SourceKind::News],
            material_kinds: vec![MaterialKind::Post, MaterialKind::Comment],
            search_domains: vec![SearchDomain::All],
            language: String::new(),
            excluded_sources: String::new(),
        }
    }
}

impl ThemeFormState {
    /// Build editor state from an existing theme.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            name: theme.name.clone(),
            kind: theme.kind,
            keywords: join_term_list(&theme.keywords),
            minus_keywords: join_term_list(&theme.minus_keywords),
            source_kinds: theme.source_kinds.clone(),
            material_kinds: theme.material_kinds.clone(),
            search_domains: theme.search_domains.clone(),
            language: theme.language.clone().unwrap_or_default(),
            excluded_sources: join_term_list(&theme.excluded_sources),
        }
    }

    /// Toggle one source class in the filter set.
    pub fn toggle_source_kind(&mut self, kind: SourceKind) {
        toggle(&mut self.source_kinds, kind);
    }

    /// Toggle one material class in the filter set.
    pub fn toggle_material_kind(&mut self, kind: MaterialKind) {
        toggle(&mut self.material_kinds, kind);
    }

    /// Toggle one search domain in the filter set.
    pub fn toggle_search_domain(&mut self, domain: SearchDomain) {
        toggle(&mut self.search_domains, domain);
    }

    /// Convert the editor state into a create/update payload.
    ///
    /// # Errors
    /// Returns a message when the name is empty, a keyword theme has no
    /// keywords, or the language filter is not a two-letter code.
    pub fn to_payload(&self) -> Result<ThemePayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("theme name is required".to_string());
        }
        let keywords = parse_term_list(&self.keywords);
        if keywords.is_empty() && self.kind == ThemeKind::Keywords {
            return Err("a keyword theme needs at least one keyword".to_string());
        }
        let language = self.language.trim().to_ascii_lowercase();
        let language = if language.is_empty() {
            None
        } else if language.len() == 2 && language.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(language)
        } else {
            return Err("language must be a two-letter code".to_string());
        };
        Ok(ThemePayload {
            name: name.to_string(),
            kind: self.kind,
            keywords,
            minus_keywords: parse_term_list(&self.minus_keywords),
            source_kinds: self.source_kinds.clone(),
            material_kinds: self.material_kinds.clone(),
            search_domains: self.search_domains.clone(),
            language,
            excluded_sources: parse_term_list(&self.excluded_sources),
        })
    }
}

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(index) = set.iter().position(|entry| *entry == value) {
        set.remove(index);
    } else {
        set.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeFormState, join_term_list, parse_term_list};
    use scano_api_models::{SearchDomain, SourceKind, ThemeKind};

    #[test]
    fn term_lists_split_on_commas_and_newlines() {
        assert_eq!(
            parse_term_list("акимат, Almaty\n air astana ,,\n"),
            vec!["акимат", "Almaty", "air astana"]
        );
        assert_eq!(parse_term_list(" , \n "), Vec::<String>::new());
        assert_eq!(
            parse_term_list("alpha, alpha, beta"),
            vec!["alpha", "beta"],
            "duplicates collapse"
        );
    }

    #[test]
    fn join_is_editable_text() {
        assert_eq!(
            join_term_list(&["a".to_string(), "b".to_string()]),
            "a, b"
        );
    }

    #[test]
    fn payload_requires_name_and_keywords() {
        let form = ThemeFormState::default();
        assert!(form.to_payload().is_err());

        let named = ThemeFormState {
            name: "Almaty".to_string(),
            ..ThemeFormState::default()
        };
        assert!(named.to_payload().is_err(), "keyword theme without keywords");

        let complete = ThemeFormState {
            name: "Almaty".to_string(),
            keywords: "акимат".to_string(),
            ..ThemeFormState::default()
        };
        let payload = complete.to_payload().expect("payload builds");
        assert_eq!(payload.keywords, vec!["акимат"]);
        assert_eq!(payload.kind, ThemeKind::Keywords);
    }

    #[test]
    fn language_filter_must_be_two_letters() {
        let mut form = ThemeFormState {
            name: "Almaty".to_string(),
            keywords: "акимат".to_string(),
            language: "KK".to_string(),
            ..ThemeFormState::default()
        };
        assert_eq!(
            form.to_payload().expect("payload builds").language.as_deref(),
            Some("kk")
        );
        form.language = "kazakh".to_string();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn filter_toggles_add_and_remove() {
        let mut form = ThemeFormState::default();
        assert!(form.source_kinds.contains(&SourceKind::News));
        form.toggle_source_kind(SourceKind::News);
        assert!(!form.source_kinds.contains(&SourceKind::News));
        form.toggle_search_domain(SearchDomain::News);
        assert!(form.search_domains.contains(&SearchDomain::News));
    }
}
