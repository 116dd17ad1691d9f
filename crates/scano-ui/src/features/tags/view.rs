//! Tag management for a theme: table plus inline editor.

use crate::app::api::use_api;
use crate::app::session::force_logout;
use crate::components::empty_state::EmptyState;
use crate::components::toast::{ToastCtx, ToastKind, push_toast};
use crate::core::store::AppStore;
use crate::features::tags::api::{create_tag, delete_tag, fetch_tags, update_tag};
use crate::features::tags::logic::TagFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::Tag;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct TagsViewProps {
    pub theme_id: String,
}

#[function_component(TagsView)]
pub(crate) fn tags_view(props: &TagsViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let tags = use_state(Vec::<Tag>::new);
    let pending = use_state(|| true);
    let error = use_state(|| None::<String>);
    let form = use_state(TagFormState::default);
    let editing = use_state(|| None::<String>);
    let form_error = use_state(|| None::<String>);
    let reload = use_state(|| 0u32);

    {
        let tags = tags.clone();
        let pending = pending.clone();
        let error = error.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |(theme_id, _reload): &(String, u32)| {
                pending.set(true);
                let guard = AbortGuard::new();
                let signal = guard.signal();
                let client = api_ctx.client.clone();
                let theme_id = theme_id.clone();
                yew::platform::spawn_local(async move {
                    match fetch_tags(&client, &theme_id, signal.as_ref()).await {
                        Ok(list) => {
                            tags.set(list);
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
            (props.theme_id.clone(), *reload),
        );
    }

    let start_edit = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |tag: Tag| {
            editing.set(Some(tag.id.clone()));
            form.set(TagFormState::from_tag(&tag));
        })
    };
    let on_name = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let on_keywords = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.keywords = input.value();
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let editing = editing.clone();
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let theme_id = props.theme_id.clone();
        let saved_label = t("toast.saved");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut draft = (*form).clone();
            draft.theme_id = theme_id.clone();
            let payload = match draft.to_payload() {
                Ok(payload) => payload,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            let form = form.clone();
            let editing = editing.clone();
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let saved_label = saved_label.clone();
            let form_error = form_error.clone();
            yew::platform::spawn_local(async move {
                let result = match (*editing).clone() {
                    Some(id) => update_tag(&client, &id, &payload).await,
                    None => create_tag(&client, &payload).await,
                };
                match result {
                    Ok(tag) => {
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{saved_label}: {}", tag.name),
                        );
                        editing.set(None);
                        form.set(TagFormState::default());
                        reload.set(*reload + 1);
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        })
    };
    let on_delete = {
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let deleted_label = t("toast.delete");
        Callback::from(move |(id, name): (String, String)| {
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let deleted_label = deleted_label.clone();
            yew::platform::spawn_local(async move {
                match delete_tag(&client, &id).await {
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

    let table = if *pending {
        html! { <p class="muted">{t("common.loading")}</p> }
    } else if let Some(error) = (*error).clone() {
        html! { <EmptyState message={error} error=true /> }
    } else if tags.is_empty() {
        html! { <EmptyState message={t("tags.empty")} /> }
    } else {
        html! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{t("tags.name")}</th>
                        <th>{t("tags.keywords")}</th>
                        <th>{t("themes.total")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for tags.iter().map(|tag| {
                        let edit = {
                            let start_edit = start_edit.clone();
                            let tag = tag.clone();
                            Callback::from(move |_| start_edit.emit(tag.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = tag.id.clone();
                            let name = tag.name.clone();
                            Callback::from(move |_| on_delete.emit((id.clone(), name.clone())))
                        };
                        html! {
                            <tr>
                                <td>{tag.name.clone()}</td>
                                <td class="muted">{tag.keywords.join(", ")}</td>
                                <td>{tag.counters.total}</td>
                                <td class="row-actions">
                                    <button class="ghost" onclick={edit}>{t("common.edit")}</button>
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
        <section class="tags-view">
            <div class="view-header">
                <h2>{t("tags.title")}</h2>
            </div>
            <form class="inline-form" onsubmit={on_submit}>
                <input
                    placeholder={t("tags.name")}
                    value={form.name.clone()}
                    oninput={on_name}
                />
                <input
                    placeholder={t("tags.keywords")}
                    value={form.keywords.clone()}
                    oninput={on_keywords}
                />
                <button type="submit">
                    {if editing.is_some() { t("common.save") } else { t("tags.create") }}
                </button>
                {form_error.as_ref().map_or_else(Html::default, |message| html! {
                    <small class="field-error">{message.clone()}</small>
                })}
            </form>
            {table}
        </section>
    }
}
