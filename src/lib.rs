// lib.rs

pub mod app_ui;
pub mod axes;
pub mod axes_util;
pub mod catalog;
pub mod config;
pub mod crosshair;
pub mod dashboard;
pub mod datawindow;
pub mod drawing_util;
pub mod error;
pub mod fundamentals;
pub mod gauge;
pub mod gpu_backend;
pub mod help;
pub mod hlcbars;
pub mod metrics_table;
pub mod navigation;
pub mod news;
pub mod preferences;
pub mod risk;
pub mod search;
pub mod series;
pub mod settings;
pub mod timeframe;
pub mod transforms;

pub use error::{Error, Result};
