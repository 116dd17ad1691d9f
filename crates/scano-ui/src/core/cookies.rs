//! Cookie string handling.
//!
//! # Design
//! - Keep header parsing/building pure so it tests natively.
//! - Values are percent-encoded; cookie separators never leak into values.
//! - Document access stays behind the wasm gate.

/// Extract a named cookie's decoded value from a `document.cookie` header.
#[must_use]
pub fn value_from_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), |decoded| decoded.into_owned()),
        )
    })
}

/// Build the `Set-Cookie`-style assignment string for a session cookie.
#[must_use]
pub fn build_assignment(name: &str, value: &str) -> String {
    format!("{name}={}; path=/; samesite=lax", urlencoding::encode(value))
}

/// Build the assignment string that expires a cookie immediately.
#[must_use]
pub fn build_removal(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; samesite=lax")
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    gloo::utils::document().dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read a named cookie from the document.
#[cfg(target_arch = "wasm32")]
pub(crate) fn load_cookie(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    value_from_header(&header, name)
}

/// Write a session cookie on the document.
#[cfg(target_arch = "wasm32")]
pub(crate) fn persist_cookie(name: &str, value: &str) {
    let Some(document) = html_document() else {
        return;
    };
    if let Err(err) = document.set_cookie(&build_assignment(name, value)) {
        gloo::console::error!("cookie write failed", name, format!("{err:?}"));
    }
}

/// Expire a cookie on the document.
#[cfg(target_arch = "wasm32")]
pub(crate) fn clear_cookie(name: &str) {
    let Some(document) = html_document() else {
        return;
    };
    if let Err(err) = document.set_cookie(&build_removal(name)) {
        gloo::console::error!("cookie clear failed", name, format!("{err:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{build_assignment, build_removal, value_from_header};

    #[test]
    fn header_lookup_finds_named_cookie() {
        let header = "locale=en; scano_acess_token=abc123; themeName=Almaty";
        assert_eq!(
            value_from_header(header, "scano_acess_token").as_deref(),
            Some("abc123")
        );
        assert_eq!(value_from_header(header, "themeName").as_deref(), Some("Almaty"));
        assert!(value_from_header(header, "missing").is_none());
    }

    #[test]
    fn values_round_trip_through_encoding() {
        let assignment = build_assignment("userData", r#"{"name":"Aliya Q"}"#);
        let raw_value = assignment
            .strip_prefix("userData=")
            .and_then(|rest| rest.split(';').next())
            .expect("assignment shape");
        let header = format!("userData={raw_value}");
        assert_eq!(
            value_from_header(&header, "userData").as_deref(),
            Some(r#"{"name":"Aliya Q"}"#)
        );
    }

    #[test]
    fn removal_expires_immediately() {
        assert!(build_removal("scano_acess_token").contains("max-age=0"));
    }
}
