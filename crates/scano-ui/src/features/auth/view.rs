//! Login form and profile page.

use crate::app::api::use_api;
use crate::app::routes::Route;
use crate::app::session::force_logout;
use crate::core::cookies::persist_cookie;
use crate::core::session::ACCESS_TOKEN_COOKIE;
use crate::core::store::AppStore;
use crate::features::auth::api::login;
use crate::features::auth::logic::{LoginFormErrors, validate_login};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(LoginView)]
pub(crate) fn login_view() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(LoginFormErrors::default);
    let server_error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let busy = busy.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = match validate_login(&email, &password) {
                Ok(request) => {
                    errors.set(LoginFormErrors::default());
                    request
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            busy.set(true);
            let errors = errors.clone();
            let server_error = server_error.clone();
            let busy = busy.clone();
            let client = api_ctx.client.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                match login(&client, &request).await {
                    Ok(response) => {
                        persist_cookie(ACCESS_TOKEN_COOKIE, &response.access_token);
                        client.set_token(Some(response.access_token.clone()));
                        dispatch.reduce_mut(|store| {
                            store.session.token = Some(response.access_token);
                        });
                        server_error.set(None);
                        errors.set(LoginFormErrors::default());
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Themes {
                                locale: DEFAULT_LOCALE.code().to_string(),
                            });
                        }
                    }
                    Err(err) => server_error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-card" onsubmit={on_submit}>
                <h1>{t("auth.title")}</h1>
                <label>
                    <span>{t("auth.email")}</span>
                    <input type="email" value={(*email).clone()} oninput={on_email} />
                    {field_error(errors.email.as_deref())}
                </label>
                <label>
                    <span>{t("auth.password")}</span>
                    <input type="password" value={(*password).clone()} oninput={on_password} />
                    {field_error(errors.password.as_deref())}
                </label>
                {server_error.as_ref().map_or_else(Html::default, |message| html! {
                    <p class="form-error">{format!("{}: {message}", t("auth.failed"))}</p>
                })}
                <button type="submit" disabled={*busy}>{t("auth.submit")}</button>
            </form>
        </div>
    }
}

fn field_error(message: Option<&str>) -> Html {
    message.map_or_else(Html::default, |message| {
        html! { <small class="field-error">{message.to_string()}</small> }
    })
}

#[function_component(ProfileView)]
pub(crate) fn profile_view() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let profile = use_selector(|store: &AppStore| store.session.profile.clone());
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();

    let on_logout = {
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                force_logout(&dispatch, navigator);
            }
        })
    };

    let Some(profile) = (*profile).clone() else {
        return html! { <p class="muted">{t("common.loading")}</p> };
    };

    html! {
        <section class="profile-card">
            <h2>{t("nav.profile")}</h2>
            {profile.avatar.as_ref().map_or_else(Html::default, |avatar| html! {
                <img class="avatar" src={avatar.clone()} alt="" />
            })}
            <dl>
                <dt>{t("users.name")}</dt>
                <dd>{profile.name.clone()}</dd>
                <dt>{t("users.email")}</dt>
                <dd>{profile.email.clone()}</dd>
                <dt>{t("users.role")}</dt>
                <dd>{bundle.text(&format!("role.{}", profile.role.as_str()), profile.role.as_str())}</dd>
                <dt>{t("users.timezone")}</dt>
                <dd>{profile.timezone.clone().unwrap_or_else(|| "—".to_string())}</dd>
            </dl>
            <button class="ghost" onclick={on_logout}>{t("nav.logout")}</button>
        </section>
    }
}
