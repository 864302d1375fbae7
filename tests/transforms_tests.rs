use multibagger_lens::catalog;
use multibagger_lens::timeframe::Timeframe;
use multibagger_lens::transforms::{
    ratio_multiplier_for_label, revenue_window, revenue_window_for_label, scale_ratios, scale_ratios_by,
    RATIO_LABELS,
};

#[test]
fn revenue_window_keeps_the_most_recent_years() {
    let p = catalog::find("RELIANCE").unwrap();

    let one_month = revenue_window(p.revenue_labels, p.revenue, Timeframe::OneMonth);
    assert_eq!(one_month.labels, vec!["FY21", "FY22", "FY23", "FY24"]);
    assert_eq!(one_month.values, vec![482000.0, 615000.0, 696000.0, 742000.0]);

    assert_eq!(revenue_window(p.revenue_labels, p.revenue, Timeframe::ThreeMonths).len(), 5);
    assert_eq!(revenue_window(p.revenue_labels, p.revenue, Timeframe::OneYear).len(), 6);

    let max = revenue_window(p.revenue_labels, p.revenue, Timeframe::Max);
    assert_eq!(max.len(), 8);
    assert_eq!(max.labels.first(), Some(&"FY17"));
}

#[test]
fn revenue_window_saturates_on_short_history() {
    let labels = ["FY22", "FY23", "FY24"];
    let values = [1.0, 2.0, 3.0];
    let window = revenue_window(&labels, &values, Timeframe::FiveYears);
    assert_eq!(window.labels, labels.to_vec());
    assert_eq!(window.values, values.to_vec());
}

#[test]
fn unknown_label_shows_full_history() {
    let p = catalog::find("TCS").unwrap();
    let window = revenue_window_for_label(p.revenue_labels, p.revenue, "2Y");
    assert_eq!(window.len(), p.revenue.len());
    assert_eq!(revenue_window_for_label(p.revenue_labels, p.revenue, "1M").len(), 4);
}

#[test]
fn one_month_keeps_catalog_ratios() {
    let p = catalog::find("RELIANCE").unwrap();
    let bars = scale_ratios(&p.ratios, Timeframe::OneMonth);
    assert_eq!(bars.values[0], 49.0);
    assert_eq!(
        bars.values,
        [
            p.ratios.gross_margin,
            p.ratios.operating_margin,
            p.ratios.net_margin,
            p.ratios.debt_equity,
            p.ratios.roe
        ]
    );
    let labels: Vec<&str> = bars.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, RATIO_LABELS.to_vec());
}

#[test]
fn longer_horizons_stretch_margins_and_shrink_leverage() {
    let p = catalog::find("RELIANCE").unwrap();
    let five_years = scale_ratios(&p.ratios, Timeframe::FiveYears);
    assert_eq!(five_years.values, [51.94, 23.45, 14.97, 0.55, 16.75]);

    let max = scale_ratios(&p.ratios, Timeframe::Max);
    assert_eq!(max.values, [52.92, 23.94, 15.29, 0.54, 17.06]);
}

#[test]
fn explicit_multiplier_matches_the_timeframe() {
    let p = catalog::find("RELIANCE").unwrap();
    assert_eq!(scale_ratios_by(&p.ratios, 1.06), scale_ratios(&p.ratios, Timeframe::FiveYears));
    assert_eq!(scale_ratios_by(&p.ratios, 1.01).values[3], 0.58);
}

#[test]
fn multiplier_by_label() {
    assert_eq!(ratio_multiplier_for_label("3M"), 1.01);
    assert_eq!(ratio_multiplier_for_label("Max"), 1.08);
    assert_eq!(ratio_multiplier_for_label("10Y"), 1.0);
}
