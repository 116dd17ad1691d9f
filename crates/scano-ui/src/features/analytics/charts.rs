//! Chart configuration adapters.
//!
//! # Design
//! - Pure reshaping only: fetched `{name, value}` aggregates become the
//!   series/category shapes the widgets render. No computation beyond shares.
//! - Empty or all-zero input becomes an explicit no-data config so widgets
//!   render a placeholder instead of a degenerate chart.
//! - Shares are integer tenths of a percent; no floats in view state.

use scano_api_models::{NameValue, SentimentCounters, SentimentLabel};

/// One donut slice with its share of the whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonutSlice {
    /// Slice label.
    pub label: String,
    /// Slice magnitude.
    pub value: u64,
    /// Share of the total in tenths of a percent (0..=1000).
    pub share_tenths: u32,
}

impl DonutSlice {
    /// Human-readable percentage, one decimal place.
    #[must_use]
    pub fn share_label(&self) -> String {
        format!("{}.{}%", self.share_tenths / 10, self.share_tenths % 10)
    }
}

/// Category/value pairs for a bar widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarSeries {
    /// Category labels in display order.
    pub categories: Vec<String>,
    /// Values aligned with `categories`.
    pub values: Vec<u64>,
    /// Largest value, for scaling.
    pub max: u64,
}

/// Configuration handed to a chart widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartConfig {
    /// Nothing to plot; render the no-data placeholder.
    Empty,
    /// Donut widget input.
    Donut(Vec<DonutSlice>),
    /// Bar widget input.
    Bars(BarSeries),
}

/// Reshape an aggregate into donut slices.
#[must_use]
pub fn donut(rows: &[NameValue]) -> ChartConfig {
    let total: u64 = rows.iter().map(|row| row.value).sum();
    if total == 0 {
        return ChartConfig::Empty;
    }
    let slices = rows
        .iter()
        .filter(|row| row.value > 0)
        .map(|row| DonutSlice {
            label: row.name.clone(),
            value: row.value,
            share_tenths: share_tenths(row.value, total),
        })
        .collect();
    ChartConfig::Donut(slices)
}

/// Reshape an aggregate into a bar series.
#[must_use]
pub fn bars(rows: &[NameValue]) -> ChartConfig {
    let max = rows.iter().map(|row| row.value).max().unwrap_or(0);
    if max == 0 {
        return ChartConfig::Empty;
    }
    ChartConfig::Bars(BarSeries {
        categories: rows.iter().map(|row| row.name.clone()).collect(),
        values: rows.iter().map(|row| row.value).collect(),
        max,
    })
}

/// Sentiment donut with a fixed slot order (positive, negative, neutral).
#[must_use]
pub fn sentiment_donut(counters: &SentimentCounters) -> ChartConfig {
    let rows = [
        NameValue {
            name: SentimentLabel::Positive.as_str().to_string(),
            value: counters.positive,
        },
        NameValue {
            name: SentimentLabel::Negative.as_str().to_string(),
            value: counters.negative,
        },
        NameValue {
            name: SentimentLabel::Neutral.as_str().to_string(),
            value: counters.neutral,
        },
    ];
    donut(&rows)
}

#[allow(clippy::cast_possible_truncation)]
const fn share_tenths(value: u64, total: u64) -> u32 {
    // total >= value > 0 here, so the result is bounded by 1000.
    (value.saturating_mul(1000) / total) as u32
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, bars, donut, sentiment_donut};
    use scano_api_models::{NameValue, SentimentCounters};

    fn rows(pairs: &[(&str, u64)]) -> Vec<NameValue> {
        pairs
            .iter()
            .map(|(name, value)| NameValue {
                name: (*name).to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn empty_or_zero_input_yields_the_placeholder() {
        assert_eq!(donut(&[]), ChartConfig::Empty);
        assert_eq!(donut(&rows(&[("news", 0)])), ChartConfig::Empty);
        assert_eq!(bars(&[]), ChartConfig::Empty);
        assert_eq!(sentiment_donut(&SentimentCounters::default()), ChartConfig::Empty);
    }

    #[test]
    fn donut_shares_are_tenths_of_the_total() {
        let ChartConfig::Donut(slices) = donut(&rows(&[("news", 3), ("social", 1)])) else {
            panic!("expected donut");
        };
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].share_tenths, 750);
        assert_eq!(slices[0].share_label(), "75.0%");
        assert_eq!(slices[1].share_tenths, 250);
    }

    #[test]
    fn zero_slices_are_dropped_from_the_donut() {
        let ChartConfig::Donut(slices) = donut(&rows(&[("news", 5), ("video", 0)])) else {
            panic!("expected donut");
        };
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "news");
    }

    #[test]
    fn bars_keep_order_and_expose_the_max() {
        let ChartConfig::Bars(series) = bars(&rows(&[("18-24", 2), ("25-34", 7), ("35+", 4)]))
        else {
            panic!("expected bars");
        };
        assert_eq!(series.categories, vec!["18-24", "25-34", "35+"]);
        assert_eq!(series.values, vec![2, 7, 4]);
        assert_eq!(series.max, 7);
    }

    #[test]
    fn sentiment_slots_keep_a_fixed_order() {
        let counters = SentimentCounters {
            positive: 1,
            negative: 2,
            neutral: 3,
            total: 6,
        };
        let ChartConfig::Donut(slices) = sentiment_donut(&counters) else {
            panic!("expected donut");
        };
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["positive", "negative", "neutral"]);
    }
}
