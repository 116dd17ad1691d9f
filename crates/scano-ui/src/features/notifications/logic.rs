//! Notification plan form state and channel parsing.

use crate::features::auth::logic::looks_like_email;
use scano_api_models::{NotificationPayload, NotificationPlan};

/// Parse a comma/newline separated recipient list.
///
/// # Errors
/// Returns the first entry that does not look like an email address.
pub fn parse_emails(raw: &str) -> Result<Vec<String>, String> {
    let mut emails = Vec::new();
    for entry in raw.split([',', '\n']) {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !looks_like_email(trimmed) {
            return Err(format!("\"{trimmed}\" is not a valid email"));
        }
        if !emails.iter().any(|seen| seen == trimmed) {
            emails.push(trimmed.to_string());
        }
    }
    Ok(emails)
}

/// Parse a comma/newline separated telegram channel list.
///
/// Channels are `@name` handles or `-100…` numeric chat ids.
///
/// # Errors
/// Returns the first entry that matches neither shape.
pub fn parse_telegram_channels(raw: &str) -> Result<Vec<String>, String> {
    let mut channels = Vec::new();
    for entry in raw.split([',', '\n']) {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let is_handle = trimmed.len() > 1
            && trimmed.starts_with('@')
            && trimmed[1..]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        let is_chat_id = trimmed.starts_with("-100")
            && trimmed.len() > 4
            && trimmed[1..].chars().all(|c| c.is_ascii_digit());
        if !is_handle && !is_chat_id {
            return Err(format!("\"{trimmed}\" is not a telegram channel"));
        }
        if !channels.iter().any(|seen| seen == trimmed) {
            channels.push(trimmed.to_string());
        }
    }
    Ok(channels)
}

/// Mutable notification plan editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationFormState {
    /// Watched theme id.
    pub theme_id: String,
    /// Raw recipient email input.
    pub emails: String,
    /// Raw telegram channel input.
    pub telegram_channels: String,
    /// Whether the plan delivers.
    pub active: bool,
}

impl Default for NotificationFormState {
    fn default() -> Self {
        Self {
            theme_id: String::new(),
            emails: String::new(),
            telegram_channels: String::new(),
            active: true,
        }
    }
}

impl NotificationFormState {
    /// Build editor state from an existing plan.
    #[must_use]
    pub fn from_plan(plan: &NotificationPlan) -> Self {
        Self {
            theme_id: plan.theme_id.clone(),
            emails: plan.emails.join(", "),
            telegram_channels: plan.telegram_channels.join(", "),
            active: plan.active,
        }
    }

    /// Convert the editor state into a create/update payload.
    ///
    /// # Errors
    /// Returns a message when no theme is picked, a channel entry is
    /// malformed, or no delivery channel remains.
    pub fn to_payload(&self) -> Result<NotificationPayload, String> {
        if self.theme_id.trim().is_empty() {
            return Err("pick a theme to watch".to_string());
        }
        let emails = parse_emails(&self.emails)?;
        let telegram_channels = parse_telegram_channels(&self.telegram_channels)?;
        if emails.is_empty() && telegram_channels.is_empty() {
            return Err("add at least one delivery channel".to_string());
        }
        Ok(NotificationPayload {
            theme_id: self.theme_id.trim().to_string(),
            emails,
            telegram_channels,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationFormState, parse_emails, parse_telegram_channels};

    #[test]
    fn recipient_lists_parse_and_dedupe() {
        assert_eq!(
            parse_emails("a@scano.kz, b@scano.kz\na@scano.kz").expect("valid"),
            vec!["a@scano.kz", "b@scano.kz"]
        );
        assert!(parse_emails("a@scano.kz, broken").is_err());
        assert_eq!(parse_emails(" \n ").expect("empty ok"), Vec::<String>::new());
    }

    #[test]
    fn telegram_channels_accept_handles_and_chat_ids() {
        assert_eq!(
            parse_telegram_channels("@scano_alerts, -1001234567").expect("valid"),
            vec!["@scano_alerts", "-1001234567"]
        );
        assert!(parse_telegram_channels("scano_alerts").is_err());
        assert!(parse_telegram_channels("@").is_err());
        assert!(parse_telegram_channels("-100").is_err());
    }

    #[test]
    fn payload_needs_a_theme_and_a_channel() {
        let empty = NotificationFormState::default();
        assert!(empty.to_payload().is_err());

        let themed = NotificationFormState {
            theme_id: "t1".to_string(),
            ..NotificationFormState::default()
        };
        assert!(themed.to_payload().is_err(), "no channel at all");

        let complete = NotificationFormState {
            theme_id: "t1".to_string(),
            emails: "a@scano.kz".to_string(),
            ..NotificationFormState::default()
        };
        let payload = complete.to_payload().expect("payload builds");
        assert_eq!(payload.emails, vec!["a@scano.kz"]);
        assert!(payload.active);
    }
}
