use chrono::{DateTime, TimeZone, Utc};
use multibagger_lens::config::Config;
use multibagger_lens::dashboard::Dashboard;
use multibagger_lens::metrics_table::SortKey;
use multibagger_lens::timeframe::Timeframe;
use multibagger_lens::Error;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 12, 10, 0, 0).unwrap()
}

#[test]
fn starts_on_the_configured_selection() {
    let dashboard = Dashboard::new(&Config::default(), fixed_now());
    assert_eq!(dashboard.selection().ticker(), "RELIANCE");
    assert_eq!(dashboard.timeframe(), Timeframe::OneYear);
    assert_eq!(dashboard.candles.candles.len(), 220);
    assert_eq!(dashboard.revenue.len(), 6);
    assert_eq!(dashboard.search.query(), "Reliance Industries (RELIANCE)");
    assert_eq!(dashboard.risks.open_id(), Some("reliance-risk-1"));
}

#[test]
fn unknown_configured_ticker_falls_back() {
    let mut config = Config::default();
    config.general.default_ticker = "INFY".to_string();
    config.general.default_timeframe = Timeframe::OneMonth;
    let dashboard = Dashboard::new(&config, fixed_now());
    assert_eq!(dashboard.selection().ticker(), "RELIANCE");
    assert_eq!(dashboard.candles.candles.len(), 22);
}

#[test]
fn switching_company_rebuilds_company_state() {
    let mut dashboard = Dashboard::new(&Config::default(), fixed_now());
    dashboard.metrics_table.sort_by(SortKey::Roe);
    dashboard.risks.toggle("reliance-risk-3");
    dashboard.help.query = "energy".to_string();
    dashboard.gauge.open();
    dashboard.alerts.set_price_threshold(12);

    dashboard.select_company("TCS", fixed_now()).unwrap();

    assert_eq!(dashboard.selection().ticker(), "TCS");
    assert_eq!(dashboard.timeframe(), Timeframe::OneYear);
    assert_eq!(dashboard.metrics_table.sort_key(), SortKey::Year);
    assert_eq!(dashboard.risks.open_id(), Some("tcs-risk-1"));
    assert!(dashboard.help.query.is_empty());
    assert!(!dashboard.gauge.is_open());
    assert_eq!(dashboard.search.query(), "Tata Consultancy Services (TCS)");
    assert_eq!(dashboard.alerts.price_threshold(), 12);

    let expected = catalog_candles("TCS", Timeframe::OneYear);
    assert_eq!(dashboard.candles.candles, expected);
}

fn catalog_candles(ticker: &str, timeframe: Timeframe) -> Vec<multibagger_lens::series::Candle> {
    multibagger_lens::catalog::find(ticker)
        .unwrap()
        .series_seed
        .generate(timeframe, fixed_now())
}

#[test]
fn unknown_company_keeps_the_selection() {
    let mut dashboard = Dashboard::new(&Config::default(), fixed_now());
    match dashboard.select_company("INFY", fixed_now()) {
        Err(Error::UnknownTicker(ticker)) => assert_eq!(ticker, "INFY"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(dashboard.selection().ticker(), "RELIANCE");
    assert_eq!(dashboard.candles.candles.len(), 220);
}

#[test]
fn timeframe_change_recomputes_and_resets_views() {
    let mut dashboard = Dashboard::new(&Config::default(), fixed_now());
    for _ in 0..5 {
        dashboard.candles.zoom(1.0);
    }
    dashboard.revenue_view.zoom(1.0);
    assert!(!dashboard.candles.view.is_reset());

    dashboard.select_timeframe(Timeframe::Max, fixed_now());

    assert_eq!(dashboard.candles.candles.len(), 420);
    assert!(dashboard.candles.view.is_reset());
    assert_eq!(dashboard.revenue.len(), 8);
    assert!(dashboard.revenue_view.is_reset());
    assert_eq!(dashboard.ratios.values[0], 52.92);
}

#[test]
fn reset_views_restores_full_extents() {
    let mut dashboard = Dashboard::new(&Config::default(), fixed_now());
    dashboard.candles.zoom(1.0);
    dashboard.candles.pan(3);
    dashboard.ratio_view.zoom(1.0);
    dashboard.reset_views();
    assert!(dashboard.candles.view.is_reset());
    assert!(dashboard.ratio_view.is_reset());
    assert_eq!(dashboard.candles.pixel_offset, 0.0);
}

#[test]
fn refresh_with_the_same_time_is_stable() {
    let mut dashboard = Dashboard::new(&Config::default(), fixed_now());
    let before = dashboard.candles.candles.clone();
    dashboard.refresh(fixed_now());
    assert_eq!(dashboard.candles.candles, before);
}
