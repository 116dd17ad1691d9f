//! Material actions and display helpers.

use crate::i18n::TranslationBundle;
use scano_api_models::SentimentLabel;

/// Material actions emitted from card controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialAction {
    /// Re-tone the material and persist the edit.
    SetTone(SentimentLabel),
    /// Delete the material.
    Delete,
}

/// Format a toast message for a successful action.
#[must_use]
pub fn success_message(
    bundle: &TranslationBundle,
    action: MaterialAction,
    title: &str,
) -> String {
    match action {
        MaterialAction::SetTone(tone) => format!(
            "{} {title} → {}",
            bundle.text("toast.tone", ""),
            bundle.text(&format!("tone.{}", tone.as_str()), tone.as_str())
        ),
        MaterialAction::Delete => format!("{} {title}", bundle.text("toast.delete", "")),
    }
}

#[cfg(test)]
mod tests {
    use super::{MaterialAction, success_message};
    use crate::i18n::{LocaleCode, TranslationBundle};
    use scano_api_models::SentimentLabel;

    #[test]
    fn success_messages_switch_on_action() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let delete = success_message(&bundle, MaterialAction::Delete, "x");
        let tone = success_message(
            &bundle,
            MaterialAction::SetTone(SentimentLabel::Positive),
            "x",
        );
        assert!(!delete.is_empty());
        assert_ne!(delete, tone);
    }
}
