// fundamentals.rs
//! Revenue line and profitability bars, both pannable and zoomable along x.

use crate::axes_util;
use crate::datawindow::ViewRange;
use crate::drawing_util;
use crate::transforms::{RatioBars, RevenueSeries};
use eframe::egui;

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(13, 148, 136);
const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(20, 184, 166);
const LABEL_BAND: f32 = 16.0;

/// Scroll zooms, drag pans by whole items, double-click resets. Returns true on any change.
pub fn apply_view_input(ui: &egui::Ui, response: &egui::Response, view: &mut ViewRange, slot: f32) -> bool {
    let before = *view;

    if response.double_clicked() {
        view.reset();
        log::debug!("chart view reset");
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            view.zoom(scroll as f64);
        }
    }

    let drag_id = response.id.with("drag_accum");
    if response.dragged() && slot > 0.0 {
        let accum = ui.data_mut(|d| {
            let accum = d.get_temp_mut_or_default::<f32>(drag_id);
            *accum += response.drag_delta().x;
            *accum
        });
        let items = (accum / slot).trunc();
        if items != 0.0 {
            view.pan(items as i64);
            ui.data_mut(|d| d.insert_temp(drag_id, accum - items * slot));
        }
    } else if response.drag_stopped() {
        ui.data_mut(|d| d.remove::<f32>(drag_id));
    }

    before != *view
}

fn allocate(ui: &mut egui::Ui, height: f32) -> (egui::Response, egui::Painter, egui::Rect) {
    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect.shrink2(egui::vec2(8.0, 6.0));
    let plot_rect = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.max.y - LABEL_BAND));
    (response, painter, plot_rect)
}

pub fn draw_revenue(ui: &mut egui::Ui, series: &RevenueSeries, view: &mut ViewRange, height: f32) -> egui::Response {
    let (response, painter, plot_rect) = allocate(ui, height);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(10.0);

    let range = view.start()..view.end();
    let (Some(values), Some(labels)) = (series.values.get(range.clone()), series.labels.get(range)) else {
        return response;
    };
    if values.is_empty() {
        return response;
    }

    let max = values.iter().copied().fold(0.0, f64::max) * 1.1;
    let scale = axes_util::create_scale_value_fn(max, plot_rect);
    let count = values.len();

    let points: Vec<egui::Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, v)| egui::pos2(drawing_util::slot_center(i, count, plot_rect), scale(*v)))
        .collect();
    painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, LINE_COLOR)));

    for (i, point) in points.iter().enumerate() {
        painter.circle_filled(*point, 3.0, LINE_COLOR);
        painter.text(
            egui::pos2(point.x, plot_rect.bottom() + 2.0),
            egui::Align2::CENTER_TOP,
            labels[i],
            font.clone(),
            text_color,
        );
    }

    if let Some(pos) = response.hover_pos() {
        if let Some(i) = drawing_util::index_at_x(pos.x, count, plot_rect, 0.0) {
            painter.text(
                plot_rect.left_top(),
                egui::Align2::LEFT_TOP,
                format!("{}: {} Cr", labels[i], axes_util::format_inr(values[i])),
                font,
                text_color,
            );
        }
    }

    response
}

pub fn draw_ratios(ui: &mut egui::Ui, bars: &RatioBars, view: &mut ViewRange, height: f32) -> egui::Response {
    let (response, painter, plot_rect) = allocate(ui, height);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(9.0);

    let visible: Vec<(&str, f64)> = bars.iter().skip(view.start()).take(view.visible_count()).collect();
    if visible.is_empty() {
        return response;
    }

    let max = visible.iter().map(|(_, v)| *v).fold(0.0, f64::max) * 1.15;
    let scale = axes_util::create_scale_value_fn(max, plot_rect);
    let count = visible.len();

    for (i, (label, value)) in visible.iter().enumerate() {
        let (x_left, x_right) = drawing_util::calculate_bar_x_position(i, count, plot_rect, 0.0, 48.0);
        let top = scale(*value);
        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(x_left, top), egui::pos2(x_right, plot_rect.bottom())),
            2.0,
            BAR_COLOR,
        );
        let x_center = (x_left + x_right) / 2.0;
        painter.text(
            egui::pos2(x_center, top - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{value:.2}"),
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(x_center, plot_rect.bottom() + 2.0),
            egui::Align2::CENTER_TOP,
            *label,
            font.clone(),
            text_color,
        );
    }

    response
}
