//! Theme dashboard table and theme editor.

use crate::app::api::use_api;
use crate::app::routes::Route;
use crate::app::session::force_logout;
use crate::components::empty_state::EmptyState;
use crate::components::toast::{ToastCtx, ToastKind, push_toast};
use crate::core::cookies::persist_cookie;
use crate::core::session::THEME_NAME_COOKIE;
use crate::core::store::AppStore;
use crate::features::themes::api::{create_theme, delete_theme, fetch_theme, fetch_themes, update_theme};
use crate::features::themes::logic::ThemeFormState;
use crate::features::themes::state::{remove_theme, set_themes, theme_by_id};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::{
    MaterialKind, SearchDomain, SentimentCounters, SourceKind, Theme, ThemeKind,
};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct ThemesViewProps {
    pub locale: String,
}

#[function_component(ThemesView)]
pub(crate) fn themes_view(props: &ThemesViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let themes = use_selector(|store: &AppStore| store.themes.clone());
    let reload = use_state(|| 0u32);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| store.themes.pending = true);
                let guard = AbortGuard::new();
                let signal = guard.signal();
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match fetch_themes(&client, signal.as_ref()).await {
                        Ok(list) => dispatch.reduce_mut(|store| set_themes(&mut store.themes, list)),
                        Err(err) if err.is_aborted() => {}
                        Err(err) if err.is_unauthorized() => {
                            if let Some(navigator) = &navigator {
                                force_logout(&dispatch, navigator);
                            }
                        }
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.themes.pending = false;
                            store.themes.error = Some(err.to_string());
                        }),
                    }
                });
                move || drop(guard)
            },
            *reload,
        );
    }

    let on_delete = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let confirm_label = t("common.delete");
        let deleted_label = t("toast.delete");
        Callback::from(move |(id, name): (String, String)| {
            if !gloo::dialogs::confirm(&format!("{confirm_label} {name}?")) {
                return;
            }
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let deleted_label = deleted_label.clone();
            yew::platform::spawn_local(async move {
                match delete_theme(&client, &id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| remove_theme(&mut store.themes, &id));
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{deleted_label}: {name}"),
                        );
                    }
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };

    let locale = props.locale.clone();
    let body = if themes.pending {
        html! { <p class="muted">{t("common.loading")}</p> }
    } else if let Some(error) = &themes.error {
        let reload = reload.clone();
        let retry = Callback::from(move |_| reload.set(*reload + 1));
        html! {
            <EmptyState message={error.clone()} error=true>
                <button class="ghost" onclick={retry}>{t("common.retry")}</button>
            </EmptyState>
        }
    } else if themes.themes.is_empty() {
        html! { <EmptyState message={t("themes.empty")} /> }
    } else {
        html! {
            <table class="data-table themes-table">
                <thead>
                    <tr>
                        <th>{t("themes.name")}</th>
                        <th>{t("themes.today")}</th>
                        <th>{t("themes.week")}</th>
                        <th>{t("themes.total")}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for themes.themes.iter().map(|theme| theme_row(theme, &locale, &on_delete, &t))}
                </tbody>
            </table>
        }
    };

    html! {
        <section class="themes-view">
            <div class="view-header">
                <h2>{t("themes.title")}</h2>
                <Link<Route> classes="button" to={Route::ThemeNew { locale: props.locale.clone() }}>
                    {t("themes.create")}
                </Link<Route>>
            </div>
            {body}
        </section>
    }
}

fn theme_row(
    theme: &Rc<Theme>,
    locale: &str,
    on_delete: &Callback<(String, String)>,
    t: &impl Fn(&str) -> String,
) -> Html {
    let id = theme.id.clone();
    let name = theme.name.clone();
    let open = {
        let name = name.clone();
        // Remember the opened theme's name for views that label by it.
        Callback::from(move |_| persist_cookie(THEME_NAME_COOKIE, &name))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = id.clone();
        let name = name.clone();
        Callback::from(move |_| on_delete.emit((id.clone(), name.clone())))
    };

    html! {
        <tr>
            <td>
                <Link<Route>
                    to={Route::Materials { locale: locale.to_string(), id: id.clone() }}
                    classes="theme-name"
                >
                    <span onclick={open}>{name}</span>
                </Link<Route>>
            </td>
            <td>{counter_cell(&theme.counters.today)}</td>
            <td>{counter_cell(&theme.counters.week)}</td>
            <td>{counter_cell(&theme.counters.total)}</td>
            <td class="row-actions">
                <Link<Route>
                    to={Route::Analytics { locale: locale.to_string(), id: id.clone() }}
                    classes="ghost"
                >{t("nav.analytic")}</Link<Route>>
                <Link<Route>
                    to={Route::ThemeEdit { locale: locale.to_string(), id }}
                    classes="ghost"
                >{t("common.edit")}</Link<Route>>
                <button class="ghost danger" onclick={delete}>{t("common.delete")}</button>
            </td>
        </tr>
    }
}

fn counter_cell(counters: &SentimentCounters) -> Html {
    html! {
        <span class="counter-cell">
            <b>{counters.total}</b>
            <span class="tone positive">{counters.positive}</span>
            <span class="tone negative">{counters.negative}</span>
            <span class="tone neutral">{counters.neutral}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeFormViewProps {
    pub locale: String,
    /// Present on the edit route; the theme is refetched by id.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(ThemeFormView)]
pub(crate) fn theme_form_view(props: &ThemeFormViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let form = use_state(ThemeFormState::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Edit flow: prefer the already-fetched list, fall back to a refetch by id.
    {
        let form = form.clone();
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |id: &Option<String>| {
                if let Some(id) = id.clone() {
                    if let Some(theme) = theme_by_id(&dispatch.get().themes, &id) {
                        form.set(ThemeFormState::from_theme(&theme));
                    } else {
                        let client = api_ctx.client.clone();
                        yew::platform::spawn_local(async move {
                            if let Ok(theme) = fetch_theme(&client, &id).await {
                                form.set(ThemeFormState::from_theme(&theme));
                            }
                        });
                    }
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let update_form = {
        let form = form.clone();
        move |apply: fn(&mut ThemeFormState, String)| {
            let form = form.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            })
        }
    };
    let update_area = {
        let form = form.clone();
        move |apply: fn(&mut ThemeFormState, String)| {
            let form = form.clone();
            Callback::from(move |event: InputEvent| {
                let area: HtmlTextAreaElement = event.target_unchecked_into();
                let mut next = (*form).clone();
                apply(&mut next, area.value());
                form.set(next);
            })
        }
    };

    let on_kind = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.kind = match select.value().as_str() {
                "company" => ThemeKind::Company,
                "person" => ThemeKind::Person,
                _ => ThemeKind::Keywords,
            };
            form.set(next);
        })
    };

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
                    Some(id) => update_theme(&client, id, &payload).await,
                    None => create_theme(&client, &payload).await,
                };
                match result {
                    Ok(theme) => {
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{saved_label}: {}", theme.name),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Themes { locale });
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let source_toggles: Html = source_kind_options()
        .into_iter()
        .map(|(kind, label)| {
            let form = form.clone();
            let checked = form.source_kinds.contains(&kind);
            let onchange = Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_source_kind(kind);
                form.set(next);
            });
            html! {
                <label class="check"><input type="checkbox" {checked} {onchange} />{label}</label>
            }
        })
        .collect();
    let material_toggles: Html = material_kind_options()
        .into_iter()
        .map(|(kind, label)| {
            let form = form.clone();
            let checked = form.material_kinds.contains(&kind);
            let onchange = Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_material_kind(kind);
                form.set(next);
            });
            html! {
                <label class="check"><input type="checkbox" {checked} {onchange} />{label}</label>
            }
        })
        .collect();
    let domain_toggles: Html = search_domain_options()
        .into_iter()
        .map(|(domain, label)| {
            let form = form.clone();
            let checked = form.search_domains.contains(&domain);
            let onchange = Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_search_domain(domain);
                form.set(next);
            });
            html! {
                <label class="check"><input type="checkbox" {checked} {onchange} />{label}</label>
            }
        })
        .collect();

    html! {
        <section class="theme-form">
            <h2>{if props.id.is_some() { t("themes.edit") } else { t("themes.create") }}</h2>
            <form onsubmit={on_submit}>
                <label>
                    <span>{t("themes.name")}</span>
                    <input value={form.name.clone()} oninput={update_form(|f, v| f.name = v)} />
                </label>
                <label>
                    <span>{t("themes.kind")}</span>
                    <select onchange={on_kind}>
                        <option value="keywords" selected={form.kind == ThemeKind::Keywords}>{"keywords"}</option>
                        <option value="company" selected={form.kind == ThemeKind::Company}>{"company"}</option>
                        <option value="person" selected={form.kind == ThemeKind::Person}>{"person"}</option>
                    </select>
                </label>
                <label>
                    <span>{t("themes.keywords")}</span>
                    <textarea value={form.keywords.clone()} oninput={update_area(|f, v| f.keywords = v)} />
                </label>
                <label>
                    <span>{t("themes.minus_keywords")}</span>
                    <textarea value={form.minus_keywords.clone()} oninput={update_area(|f, v| f.minus_keywords = v)} />
                </label>
                <fieldset>
                    <legend>{t("themes.sources")}</legend>
                    {source_toggles}
                </fieldset>
                <fieldset>
                    <legend>{t("themes.material_kinds")}</legend>
                    {material_toggles}
                </fieldset>
                <fieldset>
                    <legend>{t("themes.domains")}</legend>
                    {domain_toggles}
                </fieldset>
                <label>
                    <span>{t("themes.language")}</span>
                    <input value={form.language.clone()} oninput={update_form(|f, v| f.language = v)} placeholder="kk" />
                </label>
                <label>
                    <span>{t("themes.excluded")}</span>
                    <textarea value={form.excluded_sources.clone()} oninput={update_area(|f, v| f.excluded_sources = v)} />
                </label>
                {error.as_ref().map_or_else(Html::default, |message| html! {
                    <p class="form-error">{message.clone()}</p>
                })}
                <div class="form-actions">
                    <button type="submit" disabled={*busy}>{t("common.save")}</button>
                    <Link<Route> classes="ghost" to={Route::Themes { locale: props.locale.clone() }}>
                        {t("common.cancel")}
                    </Link<Route>>
                </div>
            </form>
        </section>
    }
}

/// Theme picker options: the reference cache first, one fetch as fallback.
#[hook]
pub(crate) fn use_theme_options() -> UseStateHandle<Vec<scano_api_models::ThemeSummary>> {
    let options = use_state(Vec::new);
    let api_ctx = use_api();
    {
        let options = options.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(cached) = crate::core::refcache::load_theme_cache() {
                    options.set(cached);
                } else {
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        if let Ok(themes) = fetch_themes(&client, None).await {
                            options.set(themes.iter().map(Theme::summary).collect());
                        }
                    });
                }
                || ()
            },
            (),
        );
    }
    options
}

const fn source_kind_options() -> [(SourceKind, &'static str); 5] {
    [
        (SourceKind::Social, "social"),
        (SourceKind::News, "news"),
        (SourceKind::Blog, "blog"),
        (SourceKind::Messenger, "messenger"),
        (SourceKind::Video, "video"),
    ]
}

const fn material_kind_options() -> [(MaterialKind, &'static str); 3] {
    [
        (MaterialKind::Post, "post"),
        (MaterialKind::Comment, "comment"),
        (MaterialKind::Repost, "repost"),
    ]
}

const fn search_domain_options() -> [(SearchDomain, &'static str); 3] {
    [
        (SearchDomain::All, "all"),
        (SearchDomain::News, "news"),
        (SearchDomain::Social, "social"),
    ]
}
