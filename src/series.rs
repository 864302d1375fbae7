// series.rs
//! Deterministic synthetic OHLC walk.
//!
//! Prices depend only on `(seed, drift, timeframe)`. Timestamps are laid out
//! backwards from the caller's reference time, so passing a fixed `now` makes
//! the whole series reproducible.

use crate::timeframe::Timeframe;
use chrono::{DateTime, Duration, Utc};

/// Closes never fall below this.
pub const PRICE_FLOOR: f64 = 5.0;
const NOISE_TREND_SCALE: f64 = 0.045;
const HIGH_WICK_SCALE: f64 = 0.1;
const LOW_WICK_SCALE: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Per-company generator input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSeed {
    pub seed: i64,
    pub drift: f64,
}

impl SeriesSeed {
    pub fn generate(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Vec<Candle> {
        generate(self.seed, self.drift, timeframe, now)
    }
}

/// Sine hash in `[0, 1)`.
pub fn pseudo_random(seed: i64, index: usize) -> f64 {
    let x = (seed as f64 * 999.0 + index as f64 * 12.9898).sin() * 43758.5453;
    x - x.floor()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn starting_close(seed: i64) -> f64 {
    150.0 + (seed % 25) as f64 * 2.0
}

/// Builds `point_count` candles for `timeframe`, oldest first, the last one stamped `now`.
pub fn generate(seed: i64, drift: f64, timeframe: Timeframe, now: DateTime<Utc>) -> Vec<Candle> {
    let policy = timeframe.policy();
    let mut candles = Vec::with_capacity(policy.point_count);
    let mut last_close = starting_close(seed);

    for i in (0..policy.point_count).rev() {
        let timestamp = now - Duration::days(policy.step_size_days * i as i64);
        let noise = pseudo_random(seed, i) - 0.5;
        let trend = drift + noise * NOISE_TREND_SCALE;

        let open = last_close;
        let close = (open * (1.0 + trend)).max(PRICE_FLOOR);
        let high = open.max(close) * (1.0 + noise.abs() * HIGH_WICK_SCALE);
        let low = open.min(close) * (1.0 - noise.abs() * LOW_WICK_SCALE);

        candles.push(Candle {
            timestamp,
            open: round2(open),
            high: round2(high),
            low: round2(low),
            close: round2(close),
        });
        last_close = close;
    }

    candles
}

/// Label-keyed entry point; an unrecognised label yields no candles.
pub fn generate_for_label(seed: i64, drift: f64, label: &str, now: DateTime<Utc>) -> Vec<Candle> {
    match label.parse::<Timeframe>() {
        Ok(timeframe) => generate(seed, drift, timeframe, now),
        Err(e) => {
            log::debug!("{e}; returning an empty series");
            Vec::new()
        }
    }
}
