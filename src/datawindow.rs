// datawindow.rs
use crate::series::Candle;
use crate::settings::{MIN_VISIBLE_ITEMS, ZOOM_SENSITIVITY};

/// Visible index window `[start, end)` over `len` items. Zoom and pan stay
/// inside the original extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    start: usize,
    end: usize,
    len: usize,
}

impl ViewRange {
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len, len }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn visible_count(&self) -> usize {
        self.end - self.start
    }

    pub fn is_reset(&self) -> bool {
        self.start == 0 && self.end == self.len
    }

    pub fn reset(&mut self) {
        *self = Self::full(self.len);
    }

    /// Positive `amount` zooms in, negative zooms out.
    pub fn zoom(&mut self, amount: f64) {
        let len = self.len;
        if len == 0 || amount == 0.0 {
            return;
        }
        let min_visible = MIN_VISIBLE_ITEMS.min(len);
        let step = ((self.visible_count() as f64 * ZOOM_SENSITIVITY) as usize).max(1);

        let (mut start, mut end) = (self.start, self.end);
        if amount > 0.0 {
            if end - start <= min_visible {
                return;
            }
            start = (start + step).min(end - min_visible);
            end = end.saturating_sub(step).max(start + min_visible);
        } else {
            start = start.saturating_sub(step);
            end = (end + step).min(len);
        }

        self.start = start;
        self.end = end.min(len).max(start + min_visible);
    }

    /// Shifts the window by `items`; positive moves toward older items.
    pub fn pan(&mut self, items: i64) {
        let visible = self.visible_count();
        let max_start = self.len - visible;
        let start = (self.start as i64 - items).clamp(0, max_start as i64) as usize;
        self.start = start;
        self.end = start + visible;
    }
}

/// Candles plus the viewport state of the price chart.
#[derive(Debug, Clone)]
pub struct CandleWindow {
    pub candles: Vec<Candle>,
    pub view: ViewRange,
    pub price: (f64, f64),
    pub pixel_offset: f32,
    cached_view: Option<ViewRange>,
}

impl CandleWindow {
    pub fn new(candles: Vec<Candle>) -> Self {
        let mut window = Self {
            view: ViewRange::full(candles.len()),
            candles,
            price: (0.0, 1.0),
            pixel_offset: 0.0,
            cached_view: None,
        };
        window.update_price_range_extrema();
        window
    }

    /// Swaps in a freshly generated series at full extents.
    pub fn replace(&mut self, candles: Vec<Candle>) {
        *self = Self::new(candles);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.pixel_offset = 0.0;
        self.update_price_range_extrema();
    }

    pub fn visible(&self) -> &[Candle] {
        &self.candles[self.view.start()..self.view.end()]
    }

    pub fn zoom(&mut self, amount: f64) {
        self.view.zoom(amount);
        self.update_price_range_extrema();
    }

    pub fn pan(&mut self, items: i64) {
        self.view.pan(items);
        self.update_price_range_extrema();
    }

    /// Drag by `dx` pixels with `slot` pixels per candle. The sub-candle
    /// remainder stays in `pixel_offset`; whole candles shift the view.
    pub fn drag(&mut self, dx: f32, slot: f32) {
        if slot <= 0.0 {
            return;
        }
        self.pixel_offset += dx;
        let items = (self.pixel_offset / slot).round() as i64;
        if items == 0 {
            return;
        }
        let before = self.view.start() as i64;
        self.pan(items);
        let moved = before - self.view.start() as i64;
        // at an edge the view cannot follow, so the offset snaps back
        self.pixel_offset = if moved == 0 {
            0.0
        } else {
            self.pixel_offset - moved as f32 * slot
        };
    }

    pub fn end_drag(&mut self) {
        self.pixel_offset = 0.0;
    }

    /// Low/high over the visible candles, `(0, 1)` when nothing is visible.
    pub fn update_price_range_extrema(&mut self) {
        if self.cached_view == Some(self.view) {
            return;
        }

        let (min, max) = self
            .visible()
            .iter()
            .fold((f64::MAX, f64::MIN), |(min, max), c| (min.min(c.low), max.max(c.high)));

        self.price = if min > max {
            (0.0, 1.0)
        } else if min == max {
            (min, min + 1.0)
        } else {
            (min, max)
        };
        self.cached_view = Some(self.view);
    }
}
