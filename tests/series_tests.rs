use chrono::{DateTime, Duration, TimeZone, Utc};
use multibagger_lens::series::{self, Candle, SeriesSeed, PRICE_FLOOR};
use multibagger_lens::timeframe::Timeframe;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 12, 10, 0, 0).unwrap()
}

fn reliance() -> SeriesSeed {
    SeriesSeed { seed: 11, drift: 0.015 }
}

#[test]
fn one_year_reliance_series() {
    let now = fixed_now();
    let candles = reliance().generate(Timeframe::OneYear, now);

    assert_eq!(candles.len(), 220);
    assert_eq!(candles[0].open, 172.0);
    assert_eq!(candles.last().unwrap().timestamp, now);
    assert_eq!(candles[0].timestamp, now - Duration::days(219));
}

fn ohlc(c: &Candle) -> (f64, f64, f64, f64) {
    (c.open, c.high, c.low, c.close)
}

#[test]
fn one_month_reliance_prices_are_fixed() {
    let candles = reliance().generate(Timeframe::OneMonth, fixed_now());
    assert_eq!(candles.len(), 22);
    assert_eq!(ohlc(&candles[0]), (172.0, 186.45, 165.61, 178.18));
    assert_eq!(ohlc(&candles[1]), (178.18, 185.47, 175.67, 182.26));
    assert_eq!(ohlc(&candles[21]), (241.83, 261.08, 233.41, 250.19));
}

#[test]
fn point_count_and_spacing_follow_the_timeframe() {
    let now = fixed_now();
    for timeframe in Timeframe::ALL {
        let policy = timeframe.policy();
        let candles = series::generate(21, 0.012, timeframe, now);
        assert_eq!(candles.len(), policy.point_count, "{timeframe}");

        for pair in candles.windows(2) {
            assert_eq!(
                pair[1].timestamp - pair[0].timestamp,
                Duration::days(policy.step_size_days),
                "{timeframe}"
            );
        }
    }
}

#[test]
fn candles_are_well_formed() {
    for (seed, drift) in [(11, 0.015), (21, 0.012), (31, 0.01), (41, 0.018), (51, 0.013), (7, -0.2)] {
        let candles = series::generate(seed, drift, Timeframe::Max, fixed_now());
        for c in &candles {
            assert!(c.high >= c.open.max(c.close), "{c:?}");
            assert!(c.low <= c.open.min(c.close), "{c:?}");
            assert!(c.close >= PRICE_FLOOR, "{c:?}");
        }
    }
}

#[test]
fn each_open_is_the_previous_close() {
    let candles = reliance().generate(Timeframe::FiveYears, fixed_now());
    for pair in candles.windows(2) {
        assert_eq!(pair[1].open, pair[0].close);
    }
}

#[test]
fn steep_negative_drift_hits_the_floor() {
    let candles = series::generate(3, -0.5, Timeframe::ThreeMonths, fixed_now());
    let last: &Candle = candles.last().unwrap();
    assert_eq!(last.close, PRICE_FLOOR);
}

#[test]
fn prices_are_deterministic_and_independent_of_now() {
    let a = reliance().generate(Timeframe::ThreeMonths, fixed_now());
    let b = reliance().generate(Timeframe::ThreeMonths, fixed_now());
    assert_eq!(a, b);

    let later = fixed_now() + Duration::days(30);
    let c = reliance().generate(Timeframe::ThreeMonths, later);
    let prices = |cs: &[Candle]| cs.iter().map(|c| (c.open, c.high, c.low, c.close)).collect::<Vec<_>>();
    assert_eq!(prices(&a), prices(&c));
    assert_eq!(c.last().unwrap().timestamp, later);
}

#[test]
fn values_are_rounded_to_cents() {
    let candles = series::generate(41, 0.018, Timeframe::OneYear, fixed_now());
    for c in candles {
        for v in [c.open, c.high, c.low, c.close] {
            assert_eq!(series::round2(v), v);
        }
    }
}

#[test]
fn label_entry_point() {
    let now = fixed_now();
    assert_eq!(
        series::generate_for_label(11, 0.015, "1Y", now),
        series::generate(11, 0.015, Timeframe::OneYear, now)
    );
    assert!(series::generate_for_label(11, 0.015, "2Y", now).is_empty());
    assert!(series::generate_for_label(11, 0.015, "", now).is_empty());
}
