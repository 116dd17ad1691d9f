//! Login form validation.
//!
//! Client-side validation is the one failure path that is always surfaced
//! per-field; keep it pure so it tests natively.

use scano_api_models::LoginRequest;

/// Minimal email shape check shared by the account forms.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !trimmed.contains(char::is_whitespace)
}

/// Per-field login validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    /// Problem with the email field, when any.
    pub email: Option<String>,
    /// Problem with the password field, when any.
    pub password: Option<String>,
}

impl LoginFormErrors {
    /// Whether the form passed validation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the login form, producing a request payload on success.
///
/// # Errors
/// Returns per-field messages when the email shape or password is invalid.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, LoginFormErrors> {
    let mut errors = LoginFormErrors::default();
    if !looks_like_email(email) {
        errors.email = Some("enter a valid email address".to_string());
    }
    if password.is_empty() {
        errors.password = Some("password is required".to_string());
    }
    if errors.is_empty() {
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::{looks_like_email, validate_login};

    #[test]
    fn email_shape_is_checked_loosely_but_sanely() {
        assert!(looks_like_email("a@scano.kz"));
        assert!(looks_like_email(" operator@mail.example.org "));
        assert!(!looks_like_email("a@nodot"));
        assert!(!looks_like_email("@scano.kz"));
        assert!(!looks_like_email("a b@scano.kz"));
        assert!(!looks_like_email("a@.kz"));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn login_reports_per_field_errors() {
        let errors = validate_login("nope", "").expect_err("invalid form");
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());

        let request = validate_login(" a@scano.kz ", "secret").expect("valid form");
        assert_eq!(request.email, "a@scano.kz");
    }
}
