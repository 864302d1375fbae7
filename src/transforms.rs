// transforms.rs
//! Projections of a company's fixed fundamentals onto the selected timeframe.

use crate::catalog::Ratios;
use crate::series::round2;
use crate::timeframe::Timeframe;

pub const RATIO_LABELS: [&str; 5] = [
    "Gross Margin %",
    "Operating Margin %",
    "Net Margin %",
    "Debt-to-Equity",
    "ROE %",
];

const OPERATING_MARGIN_GAIN: f64 = 1.1;
const NET_MARGIN_GAIN: f64 = 1.15;
const DEBT_EQUITY_DAMPING: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSeries {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
}

impl RevenueSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bar heights in `RATIO_LABELS` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBars {
    pub values: [f64; 5],
}

impl RatioBars {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        RATIO_LABELS.into_iter().zip(self.values.iter().copied())
    }
}

fn trailing<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    items[items.len().saturating_sub(count)..].to_vec()
}

/// Trailing slice of the yearly revenue history. Saturates at the full history and never pads.
pub fn revenue_window(
    labels: &[&'static str],
    values: &[f64],
    timeframe: Timeframe,
) -> RevenueSeries {
    window_of(labels, values, timeframe.revenue_window())
}

/// Unknown labels fall back to the full history.
pub fn revenue_window_for_label(
    labels: &[&'static str],
    values: &[f64],
    label: &str,
) -> RevenueSeries {
    let count = label
        .parse::<Timeframe>()
        .map(Timeframe::revenue_window)
        .unwrap_or(labels.len().max(values.len()));
    window_of(labels, values, count)
}

fn window_of(labels: &[&'static str], values: &[f64], count: usize) -> RevenueSeries {
    RevenueSeries {
        labels: trailing(labels, count),
        values: trailing(values, count),
    }
}

pub fn ratio_multiplier_for_label(label: &str) -> f64 {
    label
        .parse::<Timeframe>()
        .map(Timeframe::ratio_multiplier)
        .unwrap_or(1.0)
}

pub fn scale_ratios(ratios: &Ratios, timeframe: Timeframe) -> RatioBars {
    scale_ratios_by(ratios, timeframe.ratio_multiplier())
}

/// Cosmetic zoom on the margin bars: margins drift with the multiplier, leverage against it.
pub fn scale_ratios_by(ratios: &Ratios, multiplier: f64) -> RatioBars {
    let excess = multiplier - 1.0;
    RatioBars {
        values: [
            round2(ratios.gross_margin * multiplier),
            round2(ratios.operating_margin * (1.0 + excess * OPERATING_MARGIN_GAIN)),
            round2(ratios.net_margin * (1.0 + excess * NET_MARGIN_GAIN)),
            round2(ratios.debt_equity * (1.0 - excess * DEBT_EQUITY_DAMPING)),
            round2(ratios.roe * multiplier),
        ],
    }
}
