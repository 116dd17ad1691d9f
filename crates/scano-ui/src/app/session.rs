//! Process-wide session provider.
//!
//! Every layout used to run its own "current user" effect; this provider is
//! the single place that reads the token cookie, fetches the profile once,
//! and mirrors it for synchronous reads. Mounting any protected view without
//! a token redirects to the login route before any protected fetch runs.

use crate::app::api::ApiCtx;
use crate::app::preferences::api_base_url;
use crate::app::routes::Route;
use crate::core::cookies::{clear_cookie, load_cookie, persist_cookie};
use crate::core::session::{
    ACCESS_TOKEN_COOKIE, BootAction, THEME_NAME_COOKIE, USER_DATA_COOKIE, boot_action,
    encode_profile,
};
use crate::core::store::AppStore;
use crate::features::auth::api::fetch_profile;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Clear every trace of the session and return to the login route.
pub(crate) fn force_logout(dispatch: &Dispatch<AppStore>, navigator: &Navigator) {
    clear_cookie(ACCESS_TOKEN_COOKIE);
    clear_cookie(USER_DATA_COOKIE);
    clear_cookie(THEME_NAME_COOKIE);
    dispatch.reduce_mut(|store| store.session.clear());
    navigator.push(&Route::Login);
}

#[derive(Properties, PartialEq)]
pub(crate) struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub(crate) fn session_provider(props: &SessionProviderProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let api_ctx = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let token = use_selector(|store: &AppStore| store.session.token.clone());
    let profile_ready = use_selector(|store: &AppStore| {
        store.session.profile.is_some() || store.session.profile_pending
    });

    // Token bootstrap: cookie -> store, or straight to the login route.
    {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                match boot_action(load_cookie(ACCESS_TOKEN_COOKIE)) {
                    BootAction::Restore(cookie_token) => {
                        api_ctx.client.set_token(Some(cookie_token.clone()));
                        dispatch.reduce_mut(|store| {
                            store.session.token = Some(cookie_token);
                        });
                    }
                    BootAction::RedirectToLogin => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    // One-shot profile fetch per boot, mirrored to the cookie for
    // synchronous reads by other views.
    {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let api_ctx = api_ctx.clone();
        let profile_ready = *profile_ready;
        use_effect_with_deps(
            move |token: &Option<String>| {
                if token.is_some() && !profile_ready {
                    dispatch.reduce_mut(|store| store.session.profile_pending = true);
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        match fetch_profile(&client).await {
                            Ok(profile) => {
                                persist_cookie(USER_DATA_COOKIE, &encode_profile(&profile));
                                dispatch.reduce_mut(|store| {
                                    store.session.profile = Some(profile);
                                    store.session.profile_pending = false;
                                });
                            }
                            Err(err) if err.is_unauthorized() => {
                                if let Some(navigator) = navigator {
                                    force_logout(&dispatch, &navigator);
                                }
                            }
                            Err(err) => {
                                console::error!("profile fetch failed", err.to_string());
                                dispatch
                                    .reduce_mut(|store| store.session.profile_pending = false);
                            }
                        }
                    });
                }
                || ()
            },
            (*token).clone(),
        );
    }

    if token.is_some() {
        html! { <>{for props.children.iter()}</> }
    } else {
        Html::default()
    }
}
