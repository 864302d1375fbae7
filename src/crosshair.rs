// crosshair.rs
use crate::datawindow::CandleWindow;
use crate::drawing_util;
use eframe::egui::{self, Rect};

#[derive(Default)]
pub struct Crosshair {
    cached_index: Option<usize>,
    cached_info: Option<String>,
}

impl Crosshair {
    fn candle_under_cursor(mouse_pos: egui::Pos2, window: &CandleWindow, price_rect: Rect) -> Option<usize> {
        let visible = window.visible();
        let index = drawing_util::index_at_x(mouse_pos.x, visible.len(), price_rect, window.pixel_offset)?;
        Some(window.view.start() + index)
    }

    /// Tooltip text for the candle under the pointer, e.g. `12 Sep 2024 | O:172.00 H:...`.
    pub fn candle_info(&mut self, mouse_pos: egui::Pos2, window: &CandleWindow, price_rect: Rect) -> Option<String> {
        let index = Self::candle_under_cursor(mouse_pos, window, price_rect)?;
        if self.cached_index == Some(index) {
            return self.cached_info.clone();
        }

        let candle = window.candles.get(index)?;
        let info = format!(
            "{} | O:{:.2} H:{:.2} L:{:.2} C:{:.2}",
            candle.timestamp.format("%d %b %Y"),
            candle.open,
            candle.high,
            candle.low,
            candle.close
        );
        self.cached_index = Some(index);
        self.cached_info = Some(info.clone());
        Some(info)
    }

    pub fn highlight_candle(
        &self,
        painter: &egui::Painter,
        price_rect: Rect,
        window: &CandleWindow,
        mouse_pos: egui::Pos2,
        scale_price: &impl Fn(f64) -> f32,
    ) {
        let Some(index) = Self::candle_under_cursor(mouse_pos, window, price_rect) else {
            return;
        };
        let candle = &window.candles[index];
        let (x_left, x_right) = drawing_util::calculate_bar_x_position(
            index - window.view.start(),
            window.view.visible_count(),
            price_rect,
            window.pixel_offset,
            9.0,
        );
        painter.rect_filled(
            Rect::from_min_max(
                egui::pos2(x_left - 1.0, scale_price(candle.high) - 1.0),
                egui::pos2(x_right + 1.0, scale_price(candle.low) + 1.0),
            ),
            1.0,
            egui::Color32::from_rgba_unmultiplied(120, 120, 120, 90),
        );
    }

    pub fn draw(&self, painter: &egui::Painter, rect: Rect, mouse_pos: egui::Pos2) {
        let color = egui::Color32::from_rgba_unmultiplied(160, 160, 160, 120);
        painter.line_segment(
            [egui::pos2(mouse_pos.x, rect.top()), egui::pos2(mouse_pos.x, rect.bottom())],
            (1.0, color),
        );
        painter.line_segment(
            [egui::pos2(rect.left(), mouse_pos.y), egui::pos2(rect.right(), mouse_pos.y)],
            (1.0, color),
        );
    }

    /// Drop the cached tooltip after the series is regenerated.
    pub fn invalidate(&mut self) {
        self.cached_index = None;
        self.cached_info = None;
    }
}
