//! Routing definitions for the Scano UI.
//!
//! The locale is its own leading path segment; theme-scoped views carry the
//! theme id in the path so edit forms can refetch by id instead of smuggling
//! row payloads through cookies.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Login,
    #[at("/:locale/themes")]
    Themes { locale: String },
    #[at("/:locale/themes/new")]
    ThemeNew { locale: String },
    #[at("/:locale/themes/:id/materials")]
    Materials { locale: String, id: String },
    #[at("/:locale/themes/:id/analytic")]
    Analytics { locale: String, id: String },
    #[at("/:locale/themes/:id/edit")]
    ThemeEdit { locale: String, id: String },
    #[at("/:locale/themes/:id/tags")]
    Tags { locale: String, id: String },
    #[at("/:locale/notifications")]
    Notifications { locale: String },
    #[at("/:locale/notifications/new")]
    NotificationNew { locale: String },
    #[at("/:locale/notifications/:id/edit")]
    NotificationEdit { locale: String, id: String },
    #[at("/:locale/subscriptions")]
    Subscriptions { locale: String },
    #[at("/:locale/subscriptions/new")]
    SubscriptionNew { locale: String },
    #[at("/:locale/subscriptions/:id/edit")]
    SubscriptionEdit { locale: String, id: String },
    #[at("/:locale/users")]
    Users { locale: String },
    #[at("/:locale/users/new")]
    UserNew { locale: String },
    #[at("/:locale/users/:id/edit")]
    UserEdit { locale: String, id: String },
    #[at("/:locale/profile")]
    Profile { locale: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Locale carried by the route, defaulting for locale-free routes.
    pub(crate) fn locale(&self) -> LocaleCode {
        let raw = match self {
            Self::Login | Self::NotFound => return DEFAULT_LOCALE,
            Self::Themes { locale }
            | Self::ThemeNew { locale }
            | Self::Materials { locale, .. }
            | Self::Analytics { locale, .. }
            | Self::ThemeEdit { locale, .. }
            | Self::Tags { locale, .. }
            | Self::Notifications { locale }
            | Self::NotificationNew { locale }
            | Self::NotificationEdit { locale, .. }
            | Self::Subscriptions { locale }
            | Self::SubscriptionNew { locale }
            | Self::SubscriptionEdit { locale, .. }
            | Self::Users { locale }
            | Self::UserNew { locale }
            | Self::UserEdit { locale, .. }
            | Self::Profile { locale } => locale,
        };
        LocaleCode::from_segment(raw).unwrap_or(DEFAULT_LOCALE)
    }

    /// Theme id carried by theme-scoped routes.
    pub(crate) fn theme_id(&self) -> Option<&str> {
        match self {
            Self::Materials { id, .. }
            | Self::Analytics { id, .. }
            | Self::ThemeEdit { id, .. }
            | Self::Tags { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The same route re-rooted under another locale.
    pub(crate) fn with_locale(&self, locale: LocaleCode) -> Self {
        let code = locale.code().to_string();
        match self.clone() {
            Self::Login => Self::Login,
            Self::NotFound => Self::NotFound,
            Self::Themes { .. } => Self::Themes { locale: code },
            Self::ThemeNew { .. } => Self::ThemeNew { locale: code },
            Self::Materials { id, .. } => Self::Materials { locale: code, id },
            Self::Analytics { id, .. } => Self::Analytics { locale: code, id },
            Self::ThemeEdit { id, .. } => Self::ThemeEdit { locale: code, id },
            Self::Tags { id, .. } => Self::Tags { locale: code, id },
            Self::Notifications { .. } => Self::Notifications { locale: code },
            Self::NotificationNew { .. } => Self::NotificationNew { locale: code },
            Self::NotificationEdit { id, .. } => Self::NotificationEdit { locale: code, id },
            Self::Subscriptions { .. } => Self::Subscriptions { locale: code },
            Self::SubscriptionNew { .. } => Self::SubscriptionNew { locale: code },
            Self::SubscriptionEdit { id, .. } => Self::SubscriptionEdit { locale: code, id },
            Self::Users { .. } => Self::Users { locale: code },
            Self::UserNew { .. } => Self::UserNew { locale: code },
            Self::UserEdit { id, .. } => Self::UserEdit { locale: code, id },
            Self::Profile { .. } => Self::Profile { locale: code },
        }
    }
}
