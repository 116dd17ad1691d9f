//! Analytics widgets for a theme.

use crate::app::api::use_api;
use crate::app::session::force_logout;
use crate::components::charts::ChartCard;
use crate::core::store::AppStore;
use crate::features::analytics::api::fetch_aggregate;
use crate::features::analytics::charts::{ChartConfig, bars, donut, sentiment_donut};
use crate::features::analytics::logic::AggregateKind;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::api::AbortGuard;
use scano_api_models::{NameValue, SentimentCounters};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct AnalyticsViewProps {
    pub theme_id: String,
}

#[function_component(AnalyticsView)]
pub(crate) fn analytics_view(props: &AnalyticsViewProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api_ctx = use_api();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let charts = use_state(Vec::<(AggregateKind, ChartConfig)>::new);
    let pending = use_state(|| true);

    {
        let charts = charts.clone();
        let pending = pending.clone();
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        use_effect_with_deps(
            move |theme_id: &String| {
                pending.set(true);
                charts.set(Vec::new());
                let guard = AbortGuard::new();
                let signal = guard.signal();
                let client = api_ctx.client.clone();
                let theme_id = theme_id.clone();
                yew::platform::spawn_local(async move {
                    let mut loaded = Vec::new();
                    for kind in AggregateKind::all() {
                        match fetch_aggregate(&client, &theme_id, kind, signal.as_ref()).await {
                            Ok(rows) => loaded.push((kind, adapt(kind, &rows))),
                            Err(err) if err.is_aborted() => return,
                            Err(err) if err.is_unauthorized() => {
                                if let Some(navigator) = &navigator {
                                    force_logout(&dispatch, navigator);
                                }
                                return;
                            }
                            // A failed widget renders its no-data placeholder.
                            Err(_) => loaded.push((kind, ChartConfig::Empty)),
                        }
                    }
                    charts.set(loaded);
                    pending.set(false);
                });
                move || drop(guard)
            },
            props.theme_id.clone(),
        );
    }

    let cards: Html = if *pending {
        AggregateKind::all()
            .into_iter()
            .map(|kind| {
                html! {
                    <ChartCard
                        title={bundle.text(&format!("analytics.{}", kind.segment()), kind.segment())}
                        config={ChartConfig::Empty}
                        pending=true
                        empty_label={bundle.text("analytics.empty", "")}
                    />
                }
            })
            .collect()
    } else {
        charts
            .iter()
            .map(|(kind, config)| {
                html! {
                    <ChartCard
                        title={bundle.text(&format!("analytics.{}", kind.segment()), kind.segment())}
                        config={config.clone()}
                        pending=false
                        empty_label={bundle.text("analytics.empty", "")}
                    />
                }
            })
            .collect()
    };

    html! {
        <section class="analytics-view">
            <h2>{bundle.text("analytics.title", "Analytics")}</h2>
            <div class="chart-grid">
                {cards}
            </div>
        </section>
    }
}

fn adapt(kind: AggregateKind, rows: &[NameValue]) -> ChartConfig {
    match kind {
        AggregateKind::Sentiment => sentiment_donut(&counters_from_rows(rows)),
        AggregateKind::SourceKinds | AggregateKind::AuthorGender => donut(rows),
        AggregateKind::AuthorAge | AggregateKind::Countries | AggregateKind::Tags => bars(rows),
    }
}

fn counters_from_rows(rows: &[NameValue]) -> SentimentCounters {
    let mut counters = SentimentCounters::default();
    for row in rows {
        match row.name.as_str() {
            "positive" => counters.positive = row.value,
            "negative" => counters.negative = row.value,
            "neutral" => counters.neutral = row.value,
            _ => {}
        }
    }
    counters.total = counters.positive + counters.negative + counters.neutral;
    counters
}
