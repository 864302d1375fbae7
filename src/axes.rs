// axes.rs
use crate::axes_util;
use crate::datawindow::CandleWindow;
use crate::drawing_util;
use crate::timeframe::BucketUnit;
use eframe::egui;

const TARGET_TIME_LABELS: usize = 6;

/// Axis lines, grid and labels around the price area. Price labels go in the
/// gutter right of `price_rect`, time labels below it.
pub fn draw(
    ui: &egui::Ui,
    painter: &egui::Painter,
    price_rect: egui::Rect,
    window: &CandleWindow,
    unit: BucketUnit,
    scale_price: &impl Fn(f64) -> f32,
) {
    let text_color = ui.visuals().text_color();
    let grid_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let font = egui::FontId::monospace(10.0);

    painter.line_segment([price_rect.left_bottom(), price_rect.right_bottom()], (1.0, text_color));
    painter.line_segment([price_rect.right_top(), price_rect.right_bottom()], (1.0, text_color));

    let (min, max) = window.price;
    for (_, label, y) in
        axes_util::generate_price_labels(min, max, scale_price, price_rect.top(), price_rect.bottom())
    {
        painter.line_segment(
            [egui::pos2(price_rect.left(), y), egui::pos2(price_rect.right(), y)],
            (0.5, grid_color),
        );
        painter.text(
            egui::pos2(price_rect.right() + 4.0, y),
            egui::Align2::LEFT_CENTER,
            label,
            font.clone(),
            text_color,
        );
    }

    let visible = window.visible();
    let step = axes_util::time_label_step(visible.len(), TARGET_TIME_LABELS);
    for (i, candle) in visible.iter().enumerate().step_by(step) {
        let x = drawing_util::slot_center(i, visible.len(), price_rect) + window.pixel_offset;
        if x < price_rect.left() || x > price_rect.right() {
            continue;
        }
        painter.line_segment(
            [egui::pos2(x, price_rect.bottom()), egui::pos2(x, price_rect.bottom() + 3.0)],
            (1.0, text_color),
        );
        painter.text(
            egui::pos2(x, price_rect.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            axes_util::format_time_label(candle.timestamp, unit),
            font.clone(),
            text_color,
        );
    }
}
