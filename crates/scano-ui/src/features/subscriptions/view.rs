//! Report subscription table and editor.

use crate::app::api::use_api;
use crate::app::routes::Route;
use crate::app::session::force_logout;
use crate::components::empty_state::EmptyState;
use crate::components::toast::{ToastCtx, ToastKind, push_toast};
use crate::core::store::AppStore;
use crate::features::subscriptions::api::{
    create_subscription, delete_subscription, fetch_subscription, fetch_subscriptions,
    update_subscription,
};
use crate::features::subscriptions::logic::SubscriptionFormState;
use crate::features::themes::view::use_theme_options;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::{ExportFormat, Subscription};
use std::collections::HashMap;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct SubscriptionsViewProps {
    pub locale: String,
}

#[function_component(SubscriptionsView)]
pub(crate) fn subscriptions_view(props: &SubscriptionsViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let subscriptions = use_state(Vec::<Subscription>::new);
    let pending = use_state(|| true);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);
    let theme_options = use_theme_options();

    {
        let subscriptions = subscriptions.clone();
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
                    match fetch_subscriptions(&client, signal.as_ref()).await {
                        Ok(list) => {
                            subscriptions.set(list);
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

    let theme_names: HashMap<String, String> = theme_options
        .iter()
        .map(|summary| (summary.id.clone(), summary.name.clone()))
        .collect();

    let on_delete = {
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let deleted_label = t("toast.delete");
        Callback::from(move |id: String| {
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let deleted_label = deleted_label.clone();
            yew::platform::spawn_local(async move {
                match delete_subscription(&client, &id).await {
                    Ok(()) => {
                        push_toast(toast.as_ref(), ToastKind::Success, deleted_label.clone());
                        reload.set(*reload + 1);
                    }
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };

    let body = if *pending {
        html! { <p class="muted">{t("common.loading")}</p> }
    } else if let Some(error) = (*error).clone() {
        html! { <EmptyState message={error} error=true /> }
    } else if subscriptions.is_empty() {
        html! { <EmptyState message={t("subscriptions.empty")} /> }
    } else {
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{t("subscriptions.theme")}</th>
                        <th>{t("subscriptions.emails")}</th>
                        <th>{t("subscriptions.formats")}</th>
                        <th>{t("subscriptions.active")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for subscriptions.iter().map(|subscription| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = subscription.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        let formats = subscription
                            .formats
                            .iter()
                            .map(|format| format.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        let theme_name = theme_names
                            .get(&subscription.theme_id)
                            .cloned()
                            .unwrap_or_else(|| subscription.theme_id.clone());
                        html! {
                            <tr>
                                <td>{theme_name}</td>
                                <td class="muted">{subscription.emails.join(", ")}</td>
                                <td class="muted">{formats}</td>
                                <td>{if subscription.active { "✓" } else { "—" }}</td>
                                <td class="row-actions">
                                    <Link<Route>
                                        classes="ghost"
                                        to={Route::SubscriptionEdit {
                                            locale: props.locale.clone(),
                                            id: subscription.id.clone(),
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
        <section class="subscriptions-view">
            <div class="view-header">
                <h2>{t("subscriptions.title")}</h2>
                <Link<Route>
                    classes="button"
                    to={Route::SubscriptionNew { locale: props.locale.clone() }}
                >{t("subscriptions.create")}</Link<Route>>
            </div>
            {body}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SubscriptionFormViewProps {
    pub locale: String,
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(SubscriptionFormView)]
pub(crate) fn subscription_form_view(props: &SubscriptionFormViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let form = use_state(SubscriptionFormState::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let theme_options = use_theme_options();

    {
        let form = form.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |id: &Option<String>| {
                if let Some(id) = id.clone() {
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        if let Ok(subscription) = fetch_subscription(&client, &id).await {
                            form.set(SubscriptionFormState::from_subscription(&subscription));
                        }
                    });
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let on_theme = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.theme_id = select.value();
            form.set(next);
        })
    };
    let on_emails = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.emails = area.value();
            form.set(next);
        })
    };
    let on_header = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.header = input.value();
            form.set(next);
        })
    };
    let on_subheader = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.subheader = input.value();
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

    let format_toggles: Html = ExportFormat::all()
        .into_iter()
        .map(|format| {
            let form = form.clone();
            let checked = form.formats.contains(&format);
            let onchange = Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_format(format);
                form.set(next);
            });
            html! {
                <label class="check">
                    <input type="checkbox" {checked} {onchange} />
                    {format.as_str()}
                </label>
            }
        })
        .collect();

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        let id = props.id.clone();
        let locale = props.locale.clone();
        let saved_label = t("toast.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let error = error.clone();
            let busy = busy.clone();
            let client = api_ctx.client.clone();
            let navigator = navigator.clone();
            let toast = toast.clone();
            let id = id.clone();
            let locale = locale.clone();
            let saved_label = saved_label.clone();
            yew::platform::spawn_local(async move {
                let result = match &id {
                    Some(id) => update_subscription(&client, id, &payload).await,
                    None => create_subscription(&client, &payload).await,
                };
                match result {
                    Ok(_) => {
                        push_toast(toast.as_ref(), ToastKind::Success, saved_label.clone());
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Subscriptions { locale });
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="subscription-form">
            <h2>{if props.id.is_some() { t("common.edit") } else { t("subscriptions.create") }}</h2>
            <form onsubmit={on_submit}>
                <label>
                    <span>{t("subscriptions.theme")}</span>
                    <select onchange={on_theme}>
                        <option value="" selected={form.theme_id.is_empty()}>{"—"}</option>
                        {for theme_options.iter().map(|summary| html! {
                            <option
                                value={summary.id.clone()}
                                selected={form.theme_id == summary.id}
                            >{summary.name.clone()}</option>
                        })}
                    </select>
                </label>
                <label>
                    <span>{t("subscriptions.emails")}</span>
                    <textarea value={form.emails.clone()} oninput={on_emails} />
                </label>
                <fieldset>
                    <legend>{t("subscriptions.formats")}</legend>
                    {format_toggles}
                </fieldset>
                <label>
                    <span>{t("subscriptions.header")}</span>
                    <input value={form.header.clone()} oninput={on_header} />
                </label>
                <label>
                    <span>{t("subscriptions.subheader")}</span>
                    <input value={form.subheader.clone()} oninput={on_subheader} />
                </label>
                <label class="check">
                    <input type="checkbox" checked={form.active} onchange={on_active} />
                    <span>{t("subscriptions.active")}</span>
                </label>
                {error.as_ref().map_or_else(Html::default, |message| html! {
                    <p class="form-error">{message.clone()}</p>
                })}
                <div class="form-actions">
                    <button type="submit" disabled={*busy}>{t("common.save")}</button>
                    <Link<Route>
                        classes="ghost"
                        to={Route::Subscriptions { locale: props.locale.clone() }}
                    >{t("common.cancel")}</Link<Route>>
                </div>
            </form>
        </section>
    }
}
