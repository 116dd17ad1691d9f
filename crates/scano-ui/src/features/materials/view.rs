//! Materials list: filters, client-side pagination, selection, bulk delete.

use crate::app::api::use_api;
use crate::app::session::force_logout;
use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::empty_state::EmptyState;
use crate::components::pagination::Pagination;
use crate::components::toast::{ToastCtx, ToastKind, push_toast};
use crate::core::store::AppStore;
use crate::features::materials::api::{bulk_delete, delete_material, fetch_materials, save_tone};
use crate::features::materials::logic::{select_page_or_clear, toggle_selection};
use crate::features::materials::state::{
    MaterialRow, apply_bulk_outcome, page_ids, page_rows, remove_row, set_rows, set_tone,
    toggle_favourite,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::{SentimentLabel, SourceKind};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct MaterialsViewProps {
    pub theme_id: String,
}

#[function_component(MaterialsView)]
pub(crate) fn materials_view(props: &MaterialsViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, key);
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let toast = use_context::<ToastCtx>();
    let materials = use_selector(|store: &AppStore| store.materials.clone());
    let reload = use_state(|| 0u32);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |deps: &(String, crate::features::materials::state::MaterialFilters, u32)| {
                let (theme_id, filters, _reload) = deps.clone();
                dispatch.reduce_mut(|store| store.materials.pending = true);
                let guard = AbortGuard::new();
                let signal = guard.signal();
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match fetch_materials(&client, &theme_id, &filters, signal.as_ref()).await {
                        Ok(rows) => dispatch.reduce_mut(|store| {
                            set_rows(&mut store.materials, rows);
                            store.materials.pending = false;
                            store.materials.error = None;
                        }),
                        Err(err) if err.is_aborted() => {}
                        Err(err) if err.is_unauthorized() => {
                            if let Some(navigator) = &navigator {
                                force_logout(&dispatch, navigator);
                            }
                        }
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.materials.pending = false;
                            store.materials.error = Some(err.to_string());
                        }),
                    }
                });
                move || drop(guard)
            },
            (
                props.theme_id.clone(),
                materials.filters.clone(),
                *reload,
            ),
        );
    }

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatch.reduce_mut(|store| store.materials.filters.search = input.value());
        })
    };
    let on_tone_filter = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let tone = match select.value().as_str() {
                "positive" => Some(SentimentLabel::Positive),
                "negative" => Some(SentimentLabel::Negative),
                "neutral" => Some(SentimentLabel::Neutral),
                _ => None,
            };
            dispatch.reduce_mut(|store| store.materials.filters.tone = tone);
        })
    };
    let on_page = {
        let dispatch = dispatch.clone();
        Callback::from(move |page: usize| {
            dispatch.reduce_mut(|store| {
                store.materials.pager.page = page;
                let len = store.materials.visible_ids.len();
                store.materials.pager.clamp(len);
            });
        })
    };
    let on_page_size = {
        let dispatch = dispatch.clone();
        Callback::from(move |size: usize| {
            dispatch.reduce_mut(|store| {
                let len = store.materials.visible_ids.len();
                store.materials.pager.set_page_size(size, len);
            });
        })
    };
    let on_toggle_all = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                let ids = page_ids(&store.materials);
                store.materials.selected =
                    select_page_or_clear(&store.materials.selected, &ids);
            });
        })
    };
    let on_toggle_row = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            dispatch.reduce_mut(|store| {
                store.materials.selected = toggle_selection(&store.materials.selected, &id);
            });
        })
    };
    let on_favourite = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: String| {
            dispatch.reduce_mut(|store| toggle_favourite(&mut store.materials, &id));
        })
    };
    let on_set_tone = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let tone_label = t("toast.tone");
        Callback::from(move |(id, tone): (String, SentimentLabel)| {
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let tone_label = tone_label.clone();
            yew::platform::spawn_local(async move {
                match save_tone(&client, &id, tone).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| set_tone(&mut store.materials, &id, tone));
                        push_toast(
                            toast.as_ref(),
                            ToastKind::Success,
                            format!("{tone_label} {}", tone.as_str()),
                        );
                    }
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };
    let on_delete_row = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let deleted_label = t("toast.delete");
        Callback::from(move |id: String| {
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let deleted_label = deleted_label.clone();
            yew::platform::spawn_local(async move {
                match delete_material(&client, &id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| remove_row(&mut store.materials, &id));
                        push_toast(toast.as_ref(), ToastKind::Success, deleted_label.clone());
                    }
                    Err(err) => push_toast(toast.as_ref(), ToastKind::Error, err.to_string()),
                }
            });
        })
    };
    let on_bulk_delete = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let toast = toast.clone();
        let reload = reload.clone();
        let deleted_label = t("toast.bulk_deleted");
        let failed_label = t("toast.bulk_failed");
        Callback::from(move |_| {
            let selected: Vec<String> =
                dispatch.get().materials.selected.iter().cloned().collect();
            if selected.is_empty() {
                return;
            }
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let toast = toast.clone();
            let reload = reload.clone();
            let deleted_label = deleted_label.clone();
            let failed_label = failed_label.clone();
            yew::platform::spawn_local(async move {
                let outcome = bulk_delete(&client, &selected).await;
                dispatch.reduce_mut(|store| apply_bulk_outcome(&mut store.materials, &outcome));
                if !outcome.deleted.is_empty() {
                    push_toast(
                        toast.as_ref(),
                        ToastKind::Success,
                        format!("{} {deleted_label}", outcome.deleted.len()),
                    );
                }
                if !outcome.is_clean() {
                    push_toast(
                        toast.as_ref(),
                        ToastKind::Error,
                        format!("{} {failed_label}", outcome.failed.len()),
                    );
                }
                // Converge with the server regardless of the outcome split.
                reload.set(*reload + 1);
            });
        })
    };

    let rows = page_rows(&materials);
    let pages = materials.pager.pages(materials.visible_ids.len());
    let body = if materials.pending {
        html! { <div class="chart-skeleton" aria-hidden="true"></div> }
    } else if let Some(error) = &materials.error {
        let reload = reload.clone();
        let retry = Callback::from(move |_| reload.set(*reload + 1));
        html! {
            <EmptyState message={format!("{}: {error}", t("materials.load_failed"))} error=true>
                <button class="ghost" onclick={retry}>{t("common.retry")}</button>
            </EmptyState>
        }
    } else if rows.is_empty() {
        html! { <EmptyState message={t("materials.empty")} /> }
    } else {
        html! {
            <div class="material-cards">
                {for rows.iter().map(|row| material_card(
                    row,
                    materials.selected.contains(&row.id),
                    &on_toggle_row,
                    &on_set_tone,
                    &on_favourite,
                    &on_delete_row,
                    &t,
                ))}
            </div>
        }
    };

    html! {
        <section class="materials-view">
            <div class="view-header">
                <h2>{t("materials.title")}</h2>
                <div class="filters">
                    <input
                        class="search"
                        placeholder={t("materials.search")}
                        value={materials.filters.search.clone()}
                        oninput={on_search}
                    />
                    <select onchange={on_tone_filter}>
                        <option value="" selected={materials.filters.tone.is_none()}>{"—"}</option>
                        {for SentimentLabel::all().iter().map(|tone| html! {
                            <option
                                value={tone.as_str()}
                                selected={materials.filters.tone == Some(*tone)}
                            >{bundle.text(&format!("tone.{}", tone.as_str()), tone.as_str())}</option>
                        })}
                    </select>
                </div>
            </div>
            <BulkActionBar
                select_label={t("materials.select_all")}
                selected_label={t("materials.selected")}
                selected_count={materials.selected.len()}
                on_toggle_all={on_toggle_all}
            >
                <button
                    class="danger"
                    disabled={materials.selected.is_empty()}
                    onclick={on_bulk_delete}
                >{t("materials.delete_selected")}</button>
            </BulkActionBar>
            {body}
            <Pagination
                page={materials.pager.page}
                pages={pages}
                page_size={materials.pager.page_size}
                size_label={t("materials.page_size")}
                on_page={on_page}
                on_page_size={on_page_size}
            />
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn material_card(
    row: &Rc<MaterialRow>,
    selected: bool,
    on_toggle: &Callback<String>,
    on_set_tone: &Callback<(String, SentimentLabel)>,
    on_favourite: &Callback<String>,
    on_delete: &Callback<String>,
    t: &impl Fn(&str) -> String,
) -> Html {
    let id = row.id.clone();
    let toggle = {
        let on_toggle = on_toggle.clone();
        let id = id.clone();
        Callback::from(move |_: Event| on_toggle.emit(id.clone()))
    };
    let favourite = {
        let on_favourite = on_favourite.clone();
        let id = id.clone();
        Callback::from(move |_| on_favourite.emit(id.clone()))
    };
    let delete = {
        let on_delete = on_delete.clone();
        let id = id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };
    let retone = {
        let on_set_tone = on_set_tone.clone();
        let id = id.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let tone = match select.value().as_str() {
                "positive" => SentimentLabel::Positive,
                "negative" => SentimentLabel::Negative,
                _ => SentimentLabel::Neutral,
            };
            on_set_tone.emit((id.clone(), tone));
        })
    };

    html! {
        <article class={classes!("material-card", row.tone.as_str())}>
            <header>
                <input type="checkbox" checked={selected} onchange={toggle} />
                <a href={row.url.clone()} target="_blank" rel="noopener">{row.title.clone()}</a>
                <button
                    class={classes!("ghost", "star", row.favourite.then_some("on"))}
                    onclick={favourite}
                    aria-pressed={row.favourite.to_string()}
                >{if row.favourite { "★" } else { "☆" }}</button>
            </header>
            {row.image.as_ref().map_or_else(Html::default, |image| html! {
                <img class="material-image" src={image.clone()} alt="" loading="lazy" />
            })}
            <p class="snippet">{row.snippet.clone()}</p>
            <footer>
                <span class="pill subtle">{row.source_name.clone()}</span>
                <span class="pill subtle">{source_kind_label(row.source_kind)}</span>
                <span class="muted">{row.indexed_at.clone()}</span>
                <select onchange={retone}>
                    {for SentimentLabel::all().iter().map(|tone| html! {
                        <option value={tone.as_str()} selected={row.tone == *tone}>
                            {t(&format!("tone.{}", tone.as_str()))}
                        </option>
                    })}
                </select>
                <button class="ghost danger" onclick={delete}>{t("common.delete")}</button>
            </footer>
            {if row.tags.is_empty() { Html::default() } else { html! {
                <div class="tag-row">
                    {for row.tags.iter().map(|tag| html! {
                        <span class="pill">{tag.clone()}</span>
                    })}
                </div>
            }}}
        </article>
    }
}

const fn source_kind_label(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Social => "social",
        SourceKind::News => "news",
        SourceKind::Blog => "blog",
        SourceKind::Messenger => "messenger",
        SourceKind::Video => "video",
    }
}
