// timeframe.rs
//! Timeframe selector values and the policy each one maps to.
//!
//! The policy decides how many synthetic candles are built and how far apart
//! they are; the revenue window and ratio multiplier drive the fundamentals
//! charts. All of it is a fixed `match`, so every variant has exactly one record.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    #[default]
    OneYear,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "Max")]
    Max,
}

/// Axis tick granularity hint for the renderer. No effect on generated prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketUnit {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframePolicy {
    pub point_count: usize,
    pub step_size_days: i64,
    pub bucket_unit: BucketUnit,
}

impl Timeframe {
    pub const ALL: [Timeframe; 5] = [
        Timeframe::OneMonth,
        Timeframe::ThreeMonths,
        Timeframe::OneYear,
        Timeframe::FiveYears,
        Timeframe::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::OneYear => "1Y",
            Timeframe::FiveYears => "5Y",
            Timeframe::Max => "Max",
        }
    }

    pub fn policy(self) -> TimeframePolicy {
        let (point_count, step_size_days, bucket_unit) = match self {
            Timeframe::OneMonth => (22, 1, BucketUnit::Day),
            Timeframe::ThreeMonths => (66, 1, BucketUnit::Week),
            Timeframe::OneYear => (220, 1, BucketUnit::Week),
            Timeframe::FiveYears => (360, 5, BucketUnit::Month),
            Timeframe::Max => (420, 7, BucketUnit::Month),
        };
        TimeframePolicy {
            point_count,
            step_size_days,
            bucket_unit,
        }
    }

    /// How many of the most recent yearly revenue points the line chart shows.
    pub fn revenue_window(self) -> usize {
        match self {
            Timeframe::OneMonth => 4,
            Timeframe::ThreeMonths => 5,
            Timeframe::OneYear => 6,
            Timeframe::FiveYears | Timeframe::Max => 8,
        }
    }

    pub fn ratio_multiplier(self) -> f64 {
        match self {
            Timeframe::OneMonth => 1.0,
            Timeframe::ThreeMonths => 1.01,
            Timeframe::OneYear => 1.03,
            Timeframe::FiveYears => 1.06,
            Timeframe::Max => 1.08,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.label() == s)
            .ok_or_else(|| Error::UnknownTimeframe(s.to_string()))
    }
}

pub fn policy_for_label(label: &str) -> Option<TimeframePolicy> {
    label.parse::<Timeframe>().ok().map(Timeframe::policy)
}
