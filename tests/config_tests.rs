use multibagger_lens::config::Config;
use multibagger_lens::timeframe::Timeframe;
use multibagger_lens::Error;
use std::fs;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.default_ticker, "RELIANCE");
    assert_eq!(config.general.default_timeframe, Timeframe::OneYear);
    assert!(config.general.dark_mode);
    assert!(config.chart.show_candles);
    assert_eq!(config.window.width, 1440.0);
}

#[test]
fn partial_file_fills_in_defaults() {
    let config = Config::from_json(r#"{ "general": { "default_ticker": "DMART", "default_timeframe": "5Y" } }"#).unwrap();
    assert_eq!(config.general.default_ticker, "DMART");
    assert_eq!(config.general.default_timeframe, Timeframe::FiveYears);
    assert!(config.general.dark_mode);
    assert_eq!(config.chart, Config::default().chart);

    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(Config::from_json("{ general: "), Err(Error::ConfigParse(_))));
    assert!(matches!(
        Config::from_json(r#"{ "general": { "default_timeframe": "2Y" } }"#),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn written_config_loads_back() {
    let mut config = Config::default();
    config.general.default_ticker = "DIVISLAB".to_string();
    config.chart.show_candles = false;

    let path = std::env::temp_dir().join(format!("multibagger-config-{}.json", std::process::id()));
    fs::write(&path, config.to_json().unwrap()).unwrap();
    let loaded = Config::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join("multibagger-config-does-not-exist.json");
    assert!(matches!(Config::load(path), Err(Error::ConfigRead(_))));
}
