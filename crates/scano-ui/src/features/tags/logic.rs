//! Tag editor form state.

use crate::features::themes::logic::parse_term_list;
use scano_api_models::{Tag, TagPayload};

/// Mutable tag editor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFormState {
    /// Owning theme id.
    pub theme_id: String,
    /// Tag display name.
    pub name: String,
    /// Raw keyword list input.
    pub keywords: String,
}

impl TagFormState {
    /// Build editor state from an existing tag.
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Self {
        Self {
            theme_id: tag.theme_id.clone(),
            name: tag.name.clone(),
            keywords: tag.keywords.join(", "),
        }
    }

    /// Convert the editor state into a create/update payload.
    ///
    /// # Errors
    /// Returns a message when the name is empty or no theme is set.
    pub fn to_payload(&self) -> Result<TagPayload, String> {
        if self.theme_id.trim().is_empty() {
            return Err("pick a theme for the tag".to_string());
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err("tag name is required".to_string());
        }
        Ok(TagPayload {
            theme_id: self.theme_id.trim().to_string(),
            name: name.to_string(),
            keywords: parse_term_list(&self.keywords),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TagFormState;

    #[test]
    fn payload_requires_theme_and_name() {
        assert!(TagFormState::default().to_payload().is_err());
        let form = TagFormState {
            theme_id: "t1".to_string(),
            name: " Critics ".to_string(),
            keywords: "смог, воздух".to_string(),
        };
        let payload = form.to_payload().expect("payload builds");
        assert_eq!(payload.name, "Critics");
        assert_eq!(payload.keywords, vec!["смог", "воздух"]);
    }
}
