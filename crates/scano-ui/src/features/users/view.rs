//! User administration table and account editor.

use crate::app::api::use_api;
use crate::app::routes::Route;
use crate::app::session::force_logout;
use crate::components::empty_state::EmptyState;
use crate::components::toast::{ToastCtx, ToastKind, push_toast};
use crate::core::store::AppStore;
use crate::features::themes::view::use_theme_options;
use crate::features::users::api::{
    create_user, delete_user, fetch_user, fetch_users, update_user,
};
use crate::features::users::logic::{UserFormErrors, UserFormState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::{User, UserRole};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct UsersViewProps {
    pub locale: String,
}

#[function_component(UsersView)]
pub(crate) fn users_view(props: &UsersViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let users = use_state(Vec::<User>::new);
    let pending = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let users = users.clone();
        let pending = pending.clone();
        let error = error.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_reload: &u32| {
                pending.set(true);
                let guard = AbortGuard::new();
                let signal = guard.signal();
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match fetch_users(&client, signal.as_ref()).await {
                        Ok(list) => {
                            users.set(list);
                            error.set(None);
                            pending.set(false);
                        }
                        Err(err) if err.is_aborted() => {}
                        Err(err) if err.is_unauthorized() => {
                            if let Some(navigator) = &navigator {
                                force_logout(&dispatch, navigator);
                            }
                        }
                        Err(err) => {
                            error.set(Some(err.to_string()));
                            pending.set(false);
                        }
                    }
                });
                move || drop(guard)
            },
            *reload,
        );
    }

    let on_delete = {
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let confirm_label = t("common.delete");
        let deleted_label = t("toast.delete");
        Callback::from(move |(id, name): (String, String)| {
            if !gloo::dialogs::confirm(&format!("{confirm_label} {name}?")) {
                return;
            }
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let deleted_label = deleted_label.clone();
            yew::platform::spawn_local(async move {
                match delete_user(&client, &id).await {
                    Ok(()) => {
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{deleted_label}: {name}"),
                        );
                        reload.set(*reload + 1);
                    }
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };
    // Suspension is just an active-flag flip over the regular update payload.
    let on_toggle_active = {
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        Callback::from(move |user: User| {
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                let mut form = UserFormState::from_user(&user);
                form.active = !form.active;
                let Ok(payload) = form.to_payload(false) else {
                    return;
                };
                match update_user(&client, &user.id, &payload).await {
                    Ok(_) => reload.set(*reload + 1),
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };

    let body = if *pending {
        html! { <p class="muted">{t("common.loading")}</p> }
    } else if let Some(error) = (*error).clone() {
        html! { <EmptyState message={error} error=true /> }
    } else if users.is_empty() {
        html! { <EmptyState message={t("users.empty")} /> }
    } else {
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{t("users.name")}</th>
                        <th>{t("users.email")}</th>
                        <th>{t("users.role")}</th>
                        <th>{t("users.active")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for users.iter().map(|user| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = user.id.clone();
                            let name = user.name.clone();
                            Callback::from(move |_| on_delete.emit((id.clone(), name.clone())))
                        };
                        let toggle_active = {
                            let on_toggle_active = on_toggle_active.clone();
                            let user = user.clone();
                            Callback::from(move |_| on_toggle_active.emit(user.clone()))
                        };
                        html! {
                            <tr class={classes!((!user.active).then_some("inactive"))}>
                                <td>{user.name.clone()}</td>
                                <td class="muted">{user.email.clone()}</td>
                                <td>{bundle.text(&format!("role.{}", user.role.as_str()), user.role.as_str())}</td>
                                <td>
                                    <button class="ghost" onclick={toggle_active}>
                                        {if user.active { "✓" } else { "—" }}
                                    </button>
                                </td>
                                <td class="row-actions">
                                    <Link<Route>
                                        classes="ghost"
                                        to={Route::UserEdit {
                                            locale: props.locale.clone(),
                                            id: user.id.clone(),
                                        }}
                                    >{t("common.edit")}</Link<Route>>
                                    <button class="ghost danger" onclick={delete}>{t("common.delete")}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <section class="users-view">
            <div class="view-header">
                <h2>{t("users.title")}</h2>
                <Link<Route>
                    classes="button"
                    to={Route::UserNew { locale: props.locale.clone() }}
                >{t("users.create")}</Link<Route>>
            </div>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct UserFormViewProps {
    pub locale: String,
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(UserFormView)]
pub(crate) fn user_form_view(props: &UserFormViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let form = use_state(UserFormState::default);
    let errors = use_state(UserFormErrors::default);
    let server_error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let theme_options = use_theme_options();
    let is_new = props.id.is_none();

    // Edit flow: refetch by id rather than trusting a stale row payload.
    {
        let form = form.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |id: &Option<String>| {
                if let Some(id) = id.clone() {
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        if let Ok(user) = fetch_user(&client, &id).await {
                            form.set(UserFormState::from_user(&user));
                        }
                    });
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let text_input = {
        let form = form.clone();
        move |apply: fn(&mut UserFormState, String)| {
            let form = form.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            })
        }
    };
    let on_role = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.role = match select.value().as_str() {
                "admin" => UserRole::Admin,
                "moderator" => UserRole::Moderator,
                _ => UserRole::Guest,
            };
            form.set(next);
        })
    };
    let on_active = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.active = input.checked();
            form.set(next);
        })
    };

    let theme_toggles: Html = theme_options
        .iter()
        .map(|summary| {
            let form = form.clone();
            let id = summary.id.clone();
            let checked = form.theme_ids.contains(&id);
            let onchange = Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_theme(&id);
                form.set(next);
            });
            html! {
                <label class="check">
                    <input type="checkbox" {checked} {onchange} />
                    {summary.name.clone()}
                </label>
            }
        })
        .collect();

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let busy = busy.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        let id = props.id.clone();
        let locale = props.locale.clone();
        let saved_label = t("toast.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match form.to_payload(id.is_none()) {
                Ok(payload) => {
                    errors.set(UserFormErrors::default());
                    payload
                }
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            busy.set(true);
            let server_error = server_error.clone();
            let busy = busy.clone();
            let client = api_ctx.client.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            let id = id.clone();
            let locale = locale.clone();
            let saved_label = saved_label.clone();
            yew::platform::spawn_local(async move {
                let result = match &id {
                    Some(id) => update_user(&client, id, &payload).await,
                    None => create_user(&client, &payload).await,
                };
                match result {
                    Ok(user) => {
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{saved_label}: {}", user.name),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Users { locale });
                        }
                    }
                    Err(err) => server_error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="user-form">
            <h2>{if is_new { t("users.create") } else { t("common.edit") }}</h2>
            <form onsubmit={on_submit}>
                <label>
                    <span>{t("users.name")}</span>
                    <input value={form.name.clone()} oninput={text_input(|f, v| f.name = v)} />
                    {field_error(errors.name.as_deref())}
                </label>
                <label>
                    <span>{t("users.email")}</span>
                    <input type="email" value={form.email.clone()} oninput={text_input(|f, v| f.email = v)} />
                    {field_error(errors.email.as_deref())}
                </label>
                <label>
                    <span>{t("users.role")}</span>
                    <select onchange={on_role}>
                        {for UserRole::all().iter().map(|role| html! {
                            <option value={role.as_str()} selected={form.role == *role}>
                                {bundle.text(&format!("role.{}", role.as_str()), role.as_str())}
                            </option>
                        })}
                    </select>
                </label>
                <label class="check">
                    <input type="checkbox" checked={form.active} onchange={on_active} />
                    <span>{t("users.active")}</span>
                </label>
                <label>
                    <span>{t("users.timezone")}</span>
                    <input
                        value={form.timezone.clone()}
                        oninput={text_input(|f, v| f.timezone = v)}
                        placeholder="Asia/Almaty"
                    />
                </label>
                <fieldset>
                    <legend>{t("users.themes")}</legend>
                    {theme_toggles}
                </fieldset>
                <label>
                    <span>{t("users.password")}</span>
                    <input
                        type="password"
                        value={form.password.clone()}
                        oninput={text_input(|f, v| f.password = v)}
                    />
                </label>
                <label>
                    <span>{t("users.password_confirm")}</span>
                    <input
                        type="password"
                        value={form.password_confirm.clone()}
                        oninput={text_input(|f, v| f.password_confirm = v)}
                    />
                    {field_error(errors.password.as_deref())}
                </label>
                {server_error.as_ref().map_or_else(Html::default, |message| html! {
                    <p class="form-error">{message.clone()}</p>
                })}
                <div class="form-actions">
                    <button type="submit" disabled={*busy}>{t("common.save")}</button>
                    <Link<Route>
                        classes="ghost"
                        to={Route::Users { locale: props.locale.clone() }}
                    >{t("common.cancel")}</Link<Route>>
                </div>
            </form>
        </section>
    }
}

fn field_error(message: Option<&str>) -> Html {
    message.map_or_else(Html::default, |message| {
        html! { <small class="field-error">{message.to_string()}</small> }
    })
}
