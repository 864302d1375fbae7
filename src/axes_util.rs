// axes_util.rs
use crate::{datawindow::CandleWindow, settings, timeframe::BucketUnit};
use chrono::{DateTime, Utc};

pub fn create_scale_price_fn(window: &CandleWindow, rect: egui::Rect) -> impl Fn(f64) -> f32 {
    let (min_price, max_price) = window.price;
    let pad = (max_price - min_price) * 0.05;
    let (min_price, max_price) = (min_price - pad, max_price + pad);
    let range = (max_price - min_price).max(1e-9);
    let height = rect.height();
    let bottom = rect.bottom();

    move |price: f64| -> f32 { bottom - ((price - min_price) / range) as f32 * height }
}

/// Linear y-scale from `[0, max]` into `rect`.
pub fn create_scale_value_fn(max: f64, rect: egui::Rect) -> impl Fn(f64) -> f32 {
    let range = max.max(1e-9);
    let height = rect.height();
    let bottom = rect.bottom();

    move |value: f64| -> f32 { bottom - (value / range) as f32 * height }
}

pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    let (value, suffix, decimals): (f64, &str, usize) = if abs_price >= 1_000_000.0 {
        (price / 1_000_000.0, "m", 1)
    } else if abs_price >= 1_000.0 {
        (price / 1_000.0, "k", 1)
    } else {
        (price, "", 2)
    };

    let tolerance = if suffix.is_empty() { 1e-9 } else { 10f64.powi(-(decimals as i32 + 1)) };
    let is_round = value.fract().abs() < tolerance;

    if is_round {
        format!("{:.0}{}", value, suffix)
    } else if suffix.is_empty() && abs_price > 1.0 && value.fract().abs() < settings::PRICE_FRACTION_THRESHOLD {
        format!("{:.0}", value)
    } else {
        format!("{:.prec$}{}", value, suffix, prec = decimals)
    }
}

pub fn format_price_high_precision(price: f64) -> String {
    let abs_price = price.abs();
    let (value, suffix, decimals): (f64, &str, usize) = if abs_price >= 1_000_000.0 {
        (price / 1_000_000.0, "m", 2)
    } else if abs_price >= 1_000.0 {
        (price / 1_000.0, "k", 2)
    } else {
        (price, "", 3)
    };
    format!("{:.prec$}{}", value, suffix, prec = decimals)
}

/// Indian digit grouping: last three digits, then pairs. `742000` -> `7,42,000`.
pub fn format_inr(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let sign = if value < 0.0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("₹{sign}{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{sign}{},{tail}", groups.join(","))
}

pub fn nice_range(min: f64, max: f64, ticks: usize) -> (f64, f64, f64) {
    let range = (max - min).max(1e-9);
    if range <= 1e-9 { return (min, max, 1.0); }

    let tick_spacing = range / (ticks.max(2) - 1) as f64;
    let magnitude = 10f64.powf(tick_spacing.log10().floor());
    let normalized = tick_spacing / magnitude;

    let nice_tick = match normalized {
        n if n <= 1.5 => 1.0,
        n if n <= 3.0 => 2.0,
        n if n <= 7.0 => 5.0,
        _ => 10.0,
    } * magnitude;

    let nice_tick = nice_tick.max(1e-9);
    let nice_min = (min / nice_tick).floor() * nice_tick;
    let nice_max = (max / nice_tick).ceil() * nice_tick;

    if (nice_max - nice_min) / nice_tick > 1000.0 {
        return (min, max, range / 4.0);
    }

    (nice_min, nice_max, nice_tick)
}

pub fn generate_price_labels(
    min: f64,
    max: f64,
    scale_price: &impl Fn(f64) -> f32,
    height_limit_top: f32,
    height_limit_bottom: f32,
) -> Vec<(f64, String, f32)> {
    let (nice_min, nice_max, tick_spacing) = nice_range(min, max, 6);

    if nice_max <= nice_min || tick_spacing <= 1e-9 {
        return vec![];
    }

    let tick_count = (((nice_max - nice_min) / tick_spacing).round() as i32).min(100);
    let mut labels = vec![];

    for i in 0..=tick_count {
        let price = nice_min + i as f64 * tick_spacing;
        let y = scale_price(price);
        if y < height_limit_top || y > height_limit_bottom {
            continue;
        }
        labels.push((price, format_price(price), y));
    }

    deduplicate_price_labels(labels)
}

pub fn deduplicate_price_labels(labels: Vec<(f64, String, f32)>) -> Vec<(f64, String, f32)> {
    if labels.len() < 2 {
        return labels;
    }

    let mut final_labels = labels.clone();
    let mut changed = false;

    for i in 1..final_labels.len() {
        if final_labels[i].1 == final_labels[i - 1].1 {
            final_labels[i - 1].1 = format_price_high_precision(final_labels[i - 1].0);
            final_labels[i].1 = format_price_high_precision(final_labels[i].0);
            changed = true;
        }
    }

    if changed {
        final_labels
    } else {
        labels
    }
}

/// Every how many candles a time label goes, so that about `target_lines` fit.
pub fn time_label_step(visible_count: usize, target_lines: usize) -> usize {
    visible_count.div_ceil(target_lines.max(1)).max(1)
}

pub fn format_time_label(dt: DateTime<Utc>, unit: BucketUnit) -> String {
    match unit {
        BucketUnit::Day | BucketUnit::Week => dt.format("%d %b").to_string(),
        BucketUnit::Month => dt.format("%b %y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prices_use_suffixes() {
        assert_eq!(format_price(172.0), "172");
        assert_eq!(format_price(172.456), "172.46");
        assert_eq!(format_price(1_500.0), "1.5k");
        assert_eq!(format_price(2_000_000.0), "2m");
    }

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(742_000.0), "₹7,42,000");
        assert_eq!(format_inr(9_700.0), "₹9,700");
        assert_eq!(format_inr(12_400.0), "₹12,400");
        assert_eq!(format_inr(980.0), "₹980");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn nice_range_covers_input() {
        let (min, max, tick) = nice_range(151.3, 389.9, 6);
        assert!(min <= 151.3 && max >= 389.9);
        assert_eq!(tick, 50.0);
    }

    #[test]
    fn label_step_never_zero() {
        assert_eq!(time_label_step(0, 6), 1);
        assert_eq!(time_label_step(22, 6), 4);
        assert_eq!(time_label_step(420, 0), 420);
    }

    #[test]
    fn month_labels_show_year() {
        let dt = Utc.with_ymd_and_hms(2024, 9, 12, 0, 0, 0).unwrap();
        assert_eq!(format_time_label(dt, BucketUnit::Month), "Sep 24");
        assert_eq!(format_time_label(dt, BucketUnit::Day), "12 Sep");
        assert_eq!(format_time_label(dt, BucketUnit::Week), "12 Sep");
    }
}
