//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so callers can store/clear it without
//!   side effects.
//! - Cookie names are part of the wire contract and must not be "fixed"
//!   (`scano_acess_token` is spelled the way the server expects it).
//! - Leave cookie access to [`crate::core::cookies`] to keep this module
//!   DOM-free.

use scano_api_models::UserProfile;

/// Bearer token cookie consumed by every authenticated request.
pub const ACCESS_TOKEN_COOKIE: &str = "scano_acess_token";

/// Mirror of the signed-in profile for synchronous reads between views.
pub const USER_DATA_COOKIE: &str = "userData";

/// Display name of the most recently opened theme.
pub const THEME_NAME_COOKIE: &str = "themeName";

/// Shared session slice held in the app store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Bearer token read from the cookie, when present.
    pub token: Option<String>,
    /// Profile returned by the current-user endpoint.
    pub profile: Option<UserProfile>,
    /// Whether the one-shot profile fetch is in flight.
    pub profile_pending: bool,
}

impl SessionSlice {
    /// Whether this session carries a usable token.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.trim().is_empty())
    }

    /// Drop every trace of the session (logout or token rejection).
    pub fn clear(&mut self) {
        self.token = None;
        self.profile = None;
        self.profile_pending = false;
    }
}

/// Decision the session provider takes when a protected layout mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootAction {
    /// No usable token: go to the login route before any protected fetch.
    RedirectToLogin,
    /// Restore the session from the cookie token.
    Restore(String),
}

/// Map the token cookie (when present) to the mount decision.
#[must_use]
pub fn boot_action(cookie: Option<String>) -> BootAction {
    match cookie {
        Some(token) if !token.trim().is_empty() => BootAction::Restore(token),
        _ => BootAction::RedirectToLogin,
    }
}

/// Serialize a profile for the `userData` cookie mirror.
#[must_use]
pub fn encode_profile(profile: &UserProfile) -> String {
    serde_json::to_string(profile).unwrap_or_default()
}

/// Read a profile back from the `userData` cookie mirror.
#[must_use]
pub fn decode_profile(raw: &str) -> Option<UserProfile> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::{SessionSlice, decode_profile, encode_profile};
    use scano_api_models::{UserProfile, UserRole};

    #[test]
    fn credentials_require_non_empty_token() {
        let mut session = SessionSlice::default();
        assert!(!session.has_credentials());
        session.token = Some("   ".to_string());
        assert!(!session.has_credentials());
        session.token = Some("tok".to_string());
        assert!(session.has_credentials());
    }

    #[test]
    fn clear_drops_profile_and_token() {
        let mut session = SessionSlice {
            token: Some("tok".to_string()),
            profile: None,
            profile_pending: true,
        };
        session.clear();
        assert_eq!(session, SessionSlice::default());
    }

    #[test]
    fn missing_or_blank_token_redirects_before_any_fetch() {
        use super::{BootAction, boot_action};
        assert_eq!(boot_action(None), BootAction::RedirectToLogin);
        assert_eq!(
            boot_action(Some("  ".to_string())),
            BootAction::RedirectToLogin
        );
        assert_eq!(
            boot_action(Some("tok".to_string())),
            BootAction::Restore("tok".to_string())
        );
    }

    #[test]
    fn profile_mirror_round_trips() {
        let profile = UserProfile {
            id: "u1".to_string(),
            name: "Aliya".to_string(),
            email: "a@scano.kz".to_string(),
            role: UserRole::Admin,
            avatar: None,
            timezone: Some("Asia/Almaty".to_string()),
        };
        let decoded = decode_profile(&encode_profile(&profile)).expect("mirror decodes");
        assert_eq!(decoded, profile);
        assert!(decode_profile("not json").is_none());
    }
}
