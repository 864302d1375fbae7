// config.rs
//! Startup configuration, read from JSON.
//!
//! Search order: the path in `MULTIBAGGER_CONFIG`, then `multibagger.json` in
//! the working directory, then built-in defaults. Missing fields take their
//! defaults, so a partial file is fine.

use crate::error::Result;
use crate::settings::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::timeframe::Timeframe;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub window: WindowConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Ticker selected on launch. Unknown tickers fall back to the first company.
    pub default_ticker: String,
    pub default_timeframe: Timeframe,
    pub dark_mode: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_ticker: "RELIANCE".to_string(),
            default_timeframe: Timeframe::OneYear,
            dark_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1440.0,
            height: 900.0,
            maximized: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Candles when true, HLC bars otherwise.
    pub show_candles: bool,
    pub up_color: [u8; 3],
    pub down_color: [u8; 3],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_candles: true,
            up_color: [22, 163, 74],
            down_color: [220, 38, 38],
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Never fails: unreadable or malformed files are logged and replaced by defaults.
    pub fn load_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
