//! Chart widgets driven by the analytics adapters.
//!
//! Rendering only: the adapters in `features::analytics::charts` own every
//! reshape. Pending input renders a skeleton, empty input a placeholder.

use crate::features::analytics::charts::{BarSeries, ChartConfig, DonutSlice};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChartCardProps {
    pub title: AttrValue,
    pub config: ChartConfig,
    pub pending: bool,
    pub empty_label: AttrValue,
}

#[function_component(ChartCard)]
pub(crate) fn chart_card(props: &ChartCardProps) -> Html {
    let body = if props.pending {
        html! { <div class="chart-skeleton" aria-hidden="true"></div> }
    } else {
        match &props.config {
            ChartConfig::Empty => html! {
                <p class="muted no-data">{props.empty_label.clone()}</p>
            },
            ChartConfig::Donut(slices) => donut_svg(slices),
            ChartConfig::Bars(series) => bar_rows(series),
        }
    };

    html! {
        <section class="chart-card">
            <h3>{props.title.clone()}</h3>
            {body}
        </section>
    }
}

fn donut_svg(slices: &[DonutSlice]) -> Html {
    // pathLength=1000 lets the dash arrays reuse the integer tenths directly.
    let mut consumed: i64 = 0;
    let rings: Html = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let share = i64::from(slice.share_tenths);
            let dasharray = format!("{share} {}", 1000 - share);
            let dashoffset = (250 - consumed).to_string();
            consumed += share;
            html! {
                <circle
                    class={classes!("donut-slice", format!("series-{index}"))}
                    cx="21" cy="21" r="15.9" fill="none"
                    pathLength="1000"
                    stroke-dasharray={dasharray}
                    stroke-dashoffset={dashoffset}
                />
            }
        })
        .collect();

    html! {
        <div class="donut">
            <svg viewBox="0 0 42 42" role="img">
                {rings}
            </svg>
            <ul class="legend">
                {for slices.iter().enumerate().map(|(index, slice)| html! {
                    <li>
                        <span class={classes!("swatch", format!("series-{index}"))}></span>
                        <span>{slice.label.clone()}</span>
                        <span class="muted">{slice.share_label()}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

fn bar_rows(series: &BarSeries) -> Html {
    html! {
        <div class="bars">
            {for series.categories.iter().zip(series.values.iter()).map(|(category, value)| {
                let width = value.saturating_mul(100) / series.max.max(1);
                html! {
                    <div class="bar-row">
                        <span class="bar-label">{category.clone()}</span>
                        <div class="bar-track">
                            <div class="bar-fill" style={format!("width: {width}%")}></div>
                        </div>
                        <span class="bar-value muted">{value.to_string()}</span>
                    </div>
                }
            })}
        </div>
    }
}
