//! Chart Plotter Module
//! Paints a `ChartScene` onto an egui painter.

use crate::charts::scene::{ChartScene, SelectorLabel, Y_TITLE};
use crate::config::MarkerConfig;
use egui::epaint::TextShape;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

/// Page background behind the chart.
pub const BACKGROUND: Color32 = Color32::WHITE;
/// Axis lines, ticks and tick labels.
pub const AXIS_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
/// Fitted trend line.
pub const TREND_COLOR: Color32 = Color32::from_rgb(0xc0, 0x50, 0x50);

const TICK_SIZE: f32 = 6.0;
const TICK_FONT_SIZE: f32 = 12.0;

pub fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Draws chart scenes with egui primitives.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Paint everything except the selector labels. `surface` is the whole
    /// drawing surface; `origin` is the top-left of the plotting area.
    pub fn draw_scene(
        painter: &Painter,
        surface: Rect,
        origin: Pos2,
        scene: &ChartScene,
        style: &MarkerConfig,
    ) {
        painter.rect_filled(surface, 0.0, BACKGROUND);
        Self::draw_axes(painter, origin, scene);

        if let Some(segment) = scene.trend_line {
            let from = origin + egui::vec2(segment.from.0, segment.from.1);
            let to = origin + egui::vec2(segment.to.0, segment.to.1);
            painter.extend(Shape::dashed_line(&[from, to], Stroke::new(2.0, TREND_COLOR), 8.0, 5.0));
        }

        Self::draw_markers(painter, origin, scene, style);
        Self::draw_y_title(painter, origin, scene, style);
    }

    fn draw_axes(painter: &Painter, origin: Pos2, scene: &ChartScene) {
        let stroke = Stroke::new(1.0, AXIS_COLOR);
        let w = scene.layout.chart_width;
        let h = scene.layout.chart_height;
        let font = FontId::proportional(TICK_FONT_SIZE);

        // x-axis along the bottom edge
        painter.line_segment([origin + egui::vec2(0.0, h), origin + egui::vec2(w, h)], stroke);
        for tick in &scene.x_ticks {
            let base = origin + egui::vec2(tick.position, h);
            painter.line_segment([base, base + egui::vec2(0.0, TICK_SIZE)], stroke);
            painter.text(
                base + egui::vec2(0.0, TICK_SIZE + 3.0),
                Align2::CENTER_TOP,
                &tick.label,
                font.clone(),
                AXIS_COLOR,
            );
        }

        // y-axis along the left edge
        painter.line_segment([origin, origin + egui::vec2(0.0, h)], stroke);
        for tick in &scene.y_ticks {
            let base = origin + egui::vec2(0.0, tick.position);
            painter.line_segment([base, base - egui::vec2(TICK_SIZE, 0.0)], stroke);
            painter.text(
                base - egui::vec2(TICK_SIZE + 3.0, 0.0),
                Align2::RIGHT_CENTER,
                &tick.label,
                font.clone(),
                AXIS_COLOR,
            );
        }
    }

    fn draw_markers(painter: &Painter, origin: Pos2, scene: &ChartScene, style: &MarkerConfig) {
        let fill = color(style.fill);
        let text = color(style.text);
        let font = FontId::proportional(style.font_size);

        for marker in &scene.markers {
            let center = origin + egui::vec2(marker.cx, marker.cy);
            let stroke_color = if marker.hovered {
                color(style.hover_stroke)
            } else {
                color(style.stroke)
            };
            painter.circle(center, marker.radius, fill, Stroke::new(1.0, stroke_color));
            painter.text(center, Align2::CENTER_CENTER, &marker.abbr, font.clone(), text);
        }
    }

    fn draw_y_title(painter: &Painter, origin: Pos2, scene: &ChartScene, style: &MarkerConfig) {
        let galley = painter.layout_no_wrap(
            Y_TITLE.to_string(),
            FontId::proportional(style.label_font_size),
            color(style.active_label),
        );
        let (ax, ay) = scene.y_title_anchor();
        let size = galley.size();
        // Rotated text runs upward from its anchor; center it on (ax, ay).
        let pos = origin + egui::vec2(ax - size.y / 2.0, ay + size.x / 2.0);
        painter.add(
            TextShape::new(pos, galley, color(style.active_label))
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }

    /// Screen rectangle covered by a selector label.
    pub fn label_rect(painter: &Painter, origin: Pos2, label: &SelectorLabel, style: &MarkerConfig) -> Rect {
        let galley = painter.layout_no_wrap(
            label.text.to_string(),
            FontId::proportional(style.label_font_size),
            Color32::BLACK,
        );
        let size = galley.size();
        let bottom_center = origin + egui::vec2(label.x, label.y);
        Rect::from_min_size(bottom_center - egui::vec2(size.x / 2.0, size.y), size)
    }

    /// Paint one selector label. Active and hovered labels use the active colour.
    pub fn draw_label(
        painter: &Painter,
        origin: Pos2,
        label: &SelectorLabel,
        hovered: bool,
        style: &MarkerConfig,
    ) {
        let text_color = if label.active || hovered {
            color(style.active_label)
        } else {
            color(style.inactive_label)
        };
        painter.text(
            origin + egui::vec2(label.x, label.y),
            Align2::CENTER_BOTTOM,
            label.text,
            FontId::proportional(style.label_font_size),
            text_color,
        );
    }
}
