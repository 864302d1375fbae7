// hlcbars.rs
use crate::datawindow::CandleWindow;
use crate::drawing_util;
use eframe::egui;

const MAX_BODY_WIDTH: f32 = 9.0;

#[derive(Debug, Clone, Copy)]
pub struct CandleColors {
    pub up: egui::Color32,
    pub down: egui::Color32,
}

impl CandleColors {
    pub fn from_rgb(up: [u8; 3], down: [u8; 3]) -> Self {
        Self {
            up: egui::Color32::from_rgb(up[0], up[1], up[2]),
            down: egui::Color32::from_rgb(down[0], down[1], down[2]),
        }
    }
}

/// Candles when `show_candles`, otherwise high-low bars with a close tick.
pub fn draw(
    painter: &egui::Painter,
    price_rect: egui::Rect,
    window: &CandleWindow,
    show_candles: bool,
    colors: CandleColors,
    scale_price: &impl Fn(f64) -> f32,
) {
    let visible = window.visible();
    if visible.is_empty() {
        return;
    }
    let visible_count = visible.len();

    for (i, candle) in visible.iter().enumerate() {
        let (x_left, x_right) = drawing_util::calculate_bar_x_position(
            i,
            visible_count,
            price_rect,
            window.pixel_offset,
            MAX_BODY_WIDTH,
        );
        let x_center = (x_left + x_right) / 2.0;
        if x_right < price_rect.left() || x_left > price_rect.right() {
            continue;
        }

        let high_y = scale_price(candle.high);
        let low_y = scale_price(candle.low);
        let open_y = scale_price(candle.open);
        let close_y = scale_price(candle.close);
        let color = if candle.is_up() { colors.up } else { colors.down };

        painter.line_segment(
            [egui::pos2(x_center, high_y), egui::pos2(x_center, low_y)],
            (1.0, color),
        );

        if show_candles {
            let body_top = open_y.min(close_y);
            let body_bottom = open_y.max(close_y).max(body_top + 1.0);
            painter.rect_filled(
                egui::Rect::from_min_max(egui::pos2(x_left, body_top), egui::pos2(x_right, body_bottom)),
                0.0,
                color,
            );
        } else {
            painter.line_segment([egui::pos2(x_left, open_y), egui::pos2(x_center, open_y)], (1.0, color));
            painter.line_segment([egui::pos2(x_center, close_y), egui::pos2(x_right, close_y)], (1.0, color));
        }
    }
}
