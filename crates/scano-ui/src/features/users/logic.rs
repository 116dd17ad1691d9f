//! User account form state and validation.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to shared API types only on save.
//! - Password is required on create, optional on edit (blank keeps the old one).

use crate::features::auth::logic::looks_like_email;
use scano_api_models::{User, UserPayload, UserRole};

const MIN_PASSWORD_CHARS: usize = 8;

/// Per-field validation failures for the user editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormErrors {
    /// Problem with the name field, when any.
    pub name: Option<String>,
    /// Problem with the email field, when any.
    pub email: Option<String>,
    /// Problem with the password pair, when any.
    pub password: Option<String>,
}

impl UserFormErrors {
    /// Whether the form passed validation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Mutable user editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFormState {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Access role.
    pub role: UserRole,
    /// Whether the account may sign in.
    pub active: bool,
    /// Raw timezone input.
    pub timezone: String,
    /// Themes the account may access.
    pub theme_ids: Vec<String>,
    /// New password; blank keeps the existing one on edits.
    pub password: String,
    /// Confirmation of the new password.
    pub password_confirm: String,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::Guest,
            active: true,
            timezone: String::new(),
            theme_ids: vec![],
            password: String::new(),
            password_confirm: String::new(),
        }
    }
}

impl UserFormState {
    /// Build editor state from an existing account.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            active: user.active,
            timezone: user.timezone.clone().unwrap_or_default(),
            theme_ids: user.theme_ids.clone(),
            password: String::new(),
            password_confirm: String::new(),
        }
    }

    /// Toggle a theme assignment.
    pub fn toggle_theme(&mut self, theme_id: &str) {
        if let Some(index) = self.theme_ids.iter().position(|id| id == theme_id) {
            self.theme_ids.remove(index);
        } else {
            self.theme_ids.push(theme_id.to_string());
        }
    }

    /// Convert the editor state into a create/update payload.
    ///
    /// # Errors
    /// Returns per-field messages; `require_password` marks the create flow.
    pub fn to_payload(&self, require_password: bool) -> Result<UserPayload, UserFormErrors> {
        let mut errors = UserFormErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("name is required".to_string());
        }
        if !looks_like_email(&self.email) {
            errors.email = Some("enter a valid email address".to_string());
        }
        let password = if self.password.is_empty() && !require_password {
            None
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.password = Some(format!(
                "password must be at least {MIN_PASSWORD_CHARS} characters"
            ));
            None
        } else if self.password != self.password_confirm {
            errors.password = Some("passwords do not match".to_string());
            None
        } else {
            Some(self.password.clone())
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let timezone = self.timezone.trim();
        Ok(UserPayload {
            name: name.to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            active: self.active,
            timezone: (!timezone.is_empty()).then(|| timezone.to_string()),
            theme_ids: self.theme_ids.clone(),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{UserFormState, UserRole};
    use scano_api_models::User;

    fn filled() -> UserFormState {
        UserFormState {
            name: "Aliya".to_string(),
            email: "a@scano.kz".to_string(),
            role: UserRole::Moderator,
            password: "correct-horse".to_string(),
            password_confirm: "correct-horse".to_string(),
            ..UserFormState::default()
        }
    }

    #[test]
    fn create_flow_requires_a_password() {
        let mut form = filled();
        form.password.clear();
        form.password_confirm.clear();
        let errors = form.to_payload(true).expect_err("password required");
        assert!(errors.password.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn edit_flow_keeps_the_old_password_when_blank() {
        let mut form = filled();
        form.password.clear();
        form.password_confirm.clear();
        let payload = form.to_payload(false).expect("payload builds");
        assert!(payload.password.is_none());
    }

    #[test]
    fn confirmation_mismatch_is_a_field_error() {
        let mut form = filled();
        form.password_confirm = "different-horse".to_string();
        let errors = form.to_payload(true).expect_err("mismatch");
        assert_eq!(errors.password.as_deref(), Some("passwords do not match"));
    }

    #[test]
    fn short_passwords_are_rejected() {
        let mut form = filled();
        form.password = "short".to_string();
        form.password_confirm = "short".to_string();
        assert!(form.to_payload(true).is_err());
    }

    #[test]
    fn theme_toggle_and_round_trip() {
        let user = User {
            id: "u1".to_string(),
            name: "Aliya".to_string(),
            email: "a@scano.kz".to_string(),
            role: UserRole::Admin,
            active: false,
            avatar: None,
            timezone: Some("Asia/Almaty".to_string()),
            theme_ids: vec!["t1".to_string()],
        };
        let mut form = UserFormState::from_user(&user);
        assert_eq!(form.timezone, "Asia/Almaty");
        form.toggle_theme("t1");
        assert!(form.theme_ids.is_empty());
        form.toggle_theme("t2");
        let payload = form.to_payload(false).expect("payload builds");
        assert_eq!(payload.theme_ids, vec!["t2"]);
        assert!(!payload.active);
    }
}
