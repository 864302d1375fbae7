// settings.rs
pub const ZOOM_SENSITIVITY: f64 = 0.05;
pub const MIN_VISIBLE_ITEMS: usize = 2;
pub const CHART_BOTTOM_MARGIN: f32 = 18.0; // room for time labels
pub const PRICE_AXIS_WIDTH: f32 = 56.0;
pub const PRICE_FRACTION_THRESHOLD: f64 = 0.01; // 1% threshold for showing fractional digits
pub const CANDLE_CHART_HEIGHT: f32 = 360.0;
pub const SMALL_CHART_HEIGHT: f32 = 180.0;
pub const TABLE_PAGE_SIZE: usize = 5;
pub const SUGGESTIONS_WITH_QUERY: usize = 8;
pub const SUGGESTIONS_WITHOUT_QUERY: usize = 5;
pub const CONFIG_ENV_VAR: &str = "MULTIBAGGER_CONFIG";
pub const CONFIG_FILE_NAME: &str = "multibagger.json";
