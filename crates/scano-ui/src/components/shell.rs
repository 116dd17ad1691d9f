//! Protected layout shell: sidebar, topbar, content slot.
//!
//! Active entry and expanded group come from the pure resolver in
//! [`crate::core::nav`], keyed on the router's current pathname.

use crate::app::routes::Route;
use crate::app::session::force_logout;
use crate::core::nav::{self, NavEntry, NavGroup};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub route: Route,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let profile = use_selector(|store: &AppStore| store.session.profile.clone());
    let nav_open = use_state(|| false);

    let path = use_location().map_or_else(String::new, |location| location.path().to_string());
    let nav_state = nav::resolve(&path);
    let locale = props.route.locale();
    let locale_code = locale.code().to_string();
    let theme_id = props.route.theme_id().map(ToString::to_string);

    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };
    let on_logout = {
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                force_logout(&dispatch, navigator);
            }
        })
    };

    let locale_switcher = {
        let route = props.route.clone();
        html! {
            <div class="segmented locale-switcher">
                {for LocaleCode::all().iter().map(|code| {
                    let navigator = navigator.clone();
                    let target = route.with_locale(*code);
                    let onclick = Callback::from(move |_| {
                        if let Some(navigator) = &navigator {
                            navigator.push(&target);
                        }
                    });
                    html! {
                        <button
                            class={classes!((*code == locale).then_some("active"))}
                            {onclick}
                        >{code.code().to_uppercase()}</button>
                    }
                })}
            </div>
        }
    };

    let theme_links = theme_id.as_ref().map_or_else(Html::default, |id| {
        html! {
            <>
                {nav_item(
                    Route::Materials { locale: locale_code.clone(), id: id.clone() },
                    t("nav.materials"),
                    nav_state.active == Some(NavEntry::Materials),
                )}
                {nav_item(
                    Route::Analytics { locale: locale_code.clone(), id: id.clone() },
                    t("nav.analytic"),
                    nav_state.active == Some(NavEntry::Analytics),
                )}
                {nav_item(
                    Route::Tags { locale: locale_code.clone(), id: id.clone() },
                    t("nav.tags"),
                    nav_state.active == Some(NavEntry::Tags),
                )}
            </>
        }
    });

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Close navigation">{"✕"}</button>
                    <strong>{"Scano"}</strong>
                    <span class="muted">{"monitoring"}</span>
                </div>
                <nav>
                    {nav_item(
                        Route::Themes { locale: locale_code.clone() },
                        t("nav.themes"),
                        nav_state.active == Some(NavEntry::Themes),
                    )}
                    {theme_links}
                    {nav_group(
                        t("nav.reports"),
                        nav_state.open_group == Some(NavGroup::Reports),
                        html! {
                            <>
                                {nav_item(
                                    Route::Notifications { locale: locale_code.clone() },
                                    t("nav.notifications"),
                                    nav_state.active == Some(NavEntry::Notifications),
                                )}
                                {nav_item(
                                    Route::Subscriptions { locale: locale_code.clone() },
                                    t("nav.subscriptions"),
                                    nav_state.active == Some(NavEntry::Subscriptions),
                                )}
                            </>
                        },
                    )}
                    {nav_group(
                        t("nav.admin"),
                        nav_state.open_group == Some(NavGroup::Admin),
                        html! {
                            <>
                                {nav_item(
                                    Route::Users { locale: locale_code.clone() },
                                    t("nav.users"),
                                    nav_state.active == Some(NavEntry::Users),
                                )}
                                {nav_item(
                                    Route::Profile { locale: locale_code },
                                    t("nav.profile"),
                                    nav_state.active == Some(NavEntry::Profile),
                                )}
                            </>
                        },
                    )}
                </nav>
                <div class="sidebar-footer">
                    <div class="locale-toggle">
                        <small>{"Locale"}</small>
                        {locale_switcher}
                    </div>
                    <button class="ghost" onclick={on_logout}>{t("nav.logout")}</button>
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle_nav}>{"☰"}</button>
                    <div class="top-actions">
                        {profile.as_ref().as_ref().map_or_else(Html::default, |profile| html! {
                            <span class="pill subtle">{profile.name.clone()}</span>
                        })}
                    </div>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: String, active: bool) -> Html {
    let classes = classes!("nav-item", active.then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}

fn nav_group(label: String, open: bool, items: Html) -> Html {
    html! {
        <div class={classes!("nav-group", open.then_some("open"))}>
            <span class="nav-group-label">{label}</span>
            <div class="nav-group-items">{items}</div>
        </div>
    }
}
