// drawing_util.rs
use eframe::egui::Rect;

/// Horizontal slot per visible item, spacing included.
pub fn slot_width(visible_count: usize, chart_rect: Rect) -> f32 {
    chart_rect.width() / visible_count.max(1) as f32
}

/// Left and right x of the item at `visible_index`, shifted by the pan offset.
/// Body width is 80% of the slot, capped at `max_width`.
pub fn calculate_bar_x_position(
    visible_index: usize,
    visible_count: usize,
    chart_rect: Rect,
    pixel_offset: f32,
    max_width: f32,
) -> (f32, f32) {
    let slot = slot_width(visible_count, chart_rect);
    let bar_width = (slot * 0.8).min(max_width);
    let x_center = slot_center(visible_index, visible_count, chart_rect) + pixel_offset;
    (x_center - bar_width / 2.0, x_center + bar_width / 2.0)
}

pub fn slot_center(visible_index: usize, visible_count: usize, chart_rect: Rect) -> f32 {
    chart_rect.left() + (visible_index as f32 + 0.5) * slot_width(visible_count, chart_rect)
}

/// Visible index under screen x, if it falls inside the chart.
pub fn index_at_x(x: f32, visible_count: usize, chart_rect: Rect, pixel_offset: f32) -> Option<usize> {
    if visible_count == 0 {
        return None;
    }
    let normalized = (x - pixel_offset - chart_rect.left()) / chart_rect.width();
    if !(0.0..1.0).contains(&normalized) {
        return None;
    }
    let index = (normalized * visible_count as f32).floor() as usize;
    (index < visible_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn rect() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 50.0))
    }

    #[test]
    fn bars_sit_inside_their_slot() {
        let (left, right) = calculate_bar_x_position(0, 10, rect(), 0.0, 100.0);
        assert!(left >= 0.0 && right <= 10.0);
        assert!((right - left - 8.0).abs() < 1e-4);
    }

    #[test]
    fn index_lookup_matches_slots() {
        assert_eq!(index_at_x(5.0, 10, rect(), 0.0), Some(0));
        assert_eq!(index_at_x(99.0, 10, rect(), 0.0), Some(9));
        assert_eq!(index_at_x(-1.0, 10, rect(), 0.0), None);
        assert_eq!(index_at_x(50.0, 0, rect(), 0.0), None);
    }
}
