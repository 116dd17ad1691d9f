//! Report subscription form state.

use crate::features::notifications::logic::parse_emails;
use scano_api_models::{ExportFormat, Subscription, SubscriptionPayload};

/// Mutable subscription editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionFormState {
    /// Theme the reports cover.
    pub theme_id: String,
    /// Raw recipient email input.
    pub emails: String,
    /// Selected export formats.
    pub formats: Vec<ExportFormat>,
    /// Report header line.
    pub header: String,
    /// Report subheader line.
    pub subheader: String,
    /// Whether the subscription delivers.
    pub active: bool,
}

impl Default for SubscriptionFormState {
    fn default() -> Self {
        Self {
            theme_id: String::new(),
            emails: String::new(),
            formats: vec![ExportFormat::Pdf],
            header: String::new(),
            subheader: String::new(),
            active: true,
        }
    }
}

impl SubscriptionFormState {
    /// Build editor state from an existing subscription.
    #[must_use]
    pub fn from_subscription(subscription: &Subscription) -> Self {
        Self {
            theme_id: subscription.theme_id.clone(),
            emails: subscription.emails.join(", "),
            formats: subscription.formats.clone(),
            header: subscription.header.clone(),
            subheader: subscription.subheader.clone(),
            active: subscription.active,
        }
    }

    /// Toggle one export format in the set.
    pub fn toggle_format(&mut self, format: ExportFormat) {
        if let Some(index) = self.formats.iter().position(|entry| *entry == format) {
            self.formats.remove(index);
        } else {
            self.formats.push(format);
        }
    }

    /// Convert the editor state into a create/update payload.
    ///
    /// # Errors
    /// Returns a message when no theme is picked, the recipient list is empty
    /// or malformed, or no export format is selected.
    pub fn to_payload(&self) -> Result<SubscriptionPayload, String> {
        if self.theme_id.trim().is_empty() {
            return Err("pick a theme to report on".to_string());
        }
        let emails = parse_emails(&self.emails)?;
        if emails.is_empty() {
            return Err("add at least one recipient".to_string());
        }
        if self.formats.is_empty() {
            return Err("pick at least one file format".to_string());
        }
        Ok(SubscriptionPayload {
            theme_id: self.theme_id.trim().to_string(),
            emails,
            formats: self.formats.clone(),
            header: self.header.trim().to_string(),
            subheader: self.subheader.trim().to_string(),
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SubscriptionFormState;
    use scano_api_models::ExportFormat;

    #[test]
    fn payload_needs_theme_recipients_and_format() {
        let mut form = SubscriptionFormState {
            theme_id: "t1".to_string(),
            emails: "a@scano.kz".to_string(),
            header: " Weekly digest ".to_string(),
            ..SubscriptionFormState::default()
        };
        let payload = form.to_payload().expect("payload builds");
        assert_eq!(payload.header, "Weekly digest");
        assert_eq!(payload.formats, vec![ExportFormat::Pdf]);

        form.toggle_format(ExportFormat::Pdf);
        assert!(form.to_payload().is_err(), "no format left");

        form.toggle_format(ExportFormat::Xlsx);
        form.emails.clear();
        assert!(form.to_payload().is_err(), "no recipients");
    }

    #[test]
    fn format_toggle_round_trips() {
        let mut form = SubscriptionFormState::default();
        form.toggle_format(ExportFormat::Docx);
        assert_eq!(form.formats, vec![ExportFormat::Pdf, ExportFormat::Docx]);
        form.toggle_format(ExportFormat::Docx);
        assert_eq!(form.formats, vec![ExportFormat::Pdf]);
    }
}
