//! Sidebar navigation state derived from the current pathname.
//!
//! # Design
//! - A pure function of the path string: no reactive conditionals scattered
//!   through the shell component.
//! - Locale and id segments carry no navigation meaning and are skipped; the
//!   nearest trailing recognized segment wins.

/// Sidebar entries the shell can highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    /// Theme dashboard.
    Themes,
    /// Materials list of the active theme.
    Materials,
    /// Analytics widgets of the active theme.
    Analytics,
    /// Tag management of the active theme.
    Tags,
    /// Notification plans.
    Notifications,
    /// Report subscriptions.
    Subscriptions,
    /// User administration.
    Users,
    /// Own profile/settings.
    Profile,
}

impl NavEntry {
    /// Collapsible group the entry belongs to, when any.
    #[must_use]
    pub const fn group(self) -> Option<NavGroup> {
        match self {
            Self::Notifications | Self::Subscriptions => Some(NavGroup::Reports),
            Self::Users | Self::Profile => Some(NavGroup::Admin),
            Self::Themes | Self::Materials | Self::Analytics | Self::Tags => None,
        }
    }
}

/// Collapsible sidebar sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavGroup {
    /// Notifications + subscriptions.
    Reports,
    /// Users + profile.
    Admin,
}

/// Resolved navigation view-state for the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NavState {
    /// Highlighted sidebar entry, when the path maps to one.
    pub active: Option<NavEntry>,
    /// Section to render expanded, when the active entry sits inside one.
    pub open_group: Option<NavGroup>,
}

/// Map a pathname to the sidebar view-state.
#[must_use]
pub fn resolve(path: &str) -> NavState {
    let active = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .rev()
        .find_map(entry_for_segment);
    NavState {
        active,
        open_group: active.and_then(NavEntry::group),
    }
}

fn entry_for_segment(segment: &str) -> Option<NavEntry> {
    Some(match segment {
        "themes" => NavEntry::Themes,
        "materials" => NavEntry::Materials,
        "analytic" => NavEntry::Analytics,
        "tags" => NavEntry::Tags,
        "notifications" => NavEntry::Notifications,
        "subscriptions" => NavEntry::Subscriptions,
        "users" => NavEntry::Users,
        "profile" => NavEntry::Profile,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::{NavEntry, NavGroup, NavState, resolve};

    #[test]
    fn theme_scoped_views_resolve_from_trailing_segment() {
        assert_eq!(
            resolve("/en/themes/64f1c2/materials"),
            NavState {
                active: Some(NavEntry::Materials),
                open_group: None
            }
        );
        assert_eq!(
            resolve("/kk/themes/64f1c2/analytic"),
            NavState {
                active: Some(NavEntry::Analytics),
                open_group: None
            }
        );
    }

    #[test]
    fn edit_and_new_suffixes_keep_the_section_active() {
        let users_edit = resolve("/ru/users/64f1c2/edit");
        assert_eq!(users_edit.active, Some(NavEntry::Users));
        assert_eq!(users_edit.open_group, Some(NavGroup::Admin));

        let subs_new = resolve("/en/subscriptions/new");
        assert_eq!(subs_new.active, Some(NavEntry::Subscriptions));
        assert_eq!(subs_new.open_group, Some(NavGroup::Reports));
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        assert_eq!(resolve("/"), NavState::default());
        assert_eq!(resolve("/en"), NavState::default());
        assert_eq!(resolve("/en/64f1c2"), NavState::default());
    }

    #[test]
    fn group_expansion_follows_membership() {
        assert_eq!(resolve("/en/notifications").open_group, Some(NavGroup::Reports));
        assert_eq!(resolve("/en/profile").open_group, Some(NavGroup::Admin));
        assert_eq!(resolve("/en/themes").open_group, None);
    }
}
