//! Chart Viewer Widget
//! Central panel that sizes the chart to the window, paints it, and handles
//! hover tooltips and axis-label clicks.

use crate::charts::{tooltip_anchor, tooltip_text, ChartLayout, ChartPlotter, ChartScene, ChartState};
use crate::config::ChartConfig;
use crate::data::{CensusData, ChosenAxis};
use crate::stats::AxisSummary;
use egui::{Align2, CursorIcon, RichText, Sense};

/// Interactive scatter plot surface.
#[derive(Default)]
pub struct ChartViewer {
    state: Option<ChartState>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the current chart; the next frame with data starts fresh.
    pub fn clear(&mut self) {
        self.state = None;
    }

    /// Axis currently plotted, if a chart exists.
    pub fn chosen_axis(&self) -> Option<ChosenAxis> {
        self.state.as_ref().map(ChartState::chosen_axis)
    }

    /// Switch axis from outside the chart (menu picker).
    pub fn select_axis(&mut self, axis: ChosenAxis, data: &CensusData, now: f64) -> bool {
        self.state
            .as_mut()
            .is_some_and(|state| state.select_axis(axis, data, now))
    }

    /// Draw the chart. Returns the newly chosen axis when a selector
    /// label click switched it.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        data: Option<&CensusData>,
        config: &ChartConfig,
        initial_axis: ChosenAxis,
        trend: Option<&AxisSummary>,
    ) -> Option<ChosenAxis> {
        let Some(data) = data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return None;
        };

        let available = ui.available_size();
        let layout = ChartLayout::fit(&config.layout, available.x, available.y);
        let now = ctx.input(|i| i.time);

        // Resize rebuilds the scales in place, so the chart is never drawn twice.
        let state = self
            .state
            .get_or_insert_with(|| ChartState::new(data, initial_axis, layout, config));
        state.resize(layout, data);
        state.settle(now);

        let (response, painter) =
            ui.allocate_painter(egui::vec2(layout.width, layout.height), Sense::hover());
        let origin = response.rect.min + egui::vec2(layout.margins.left, layout.margins.top);

        let mut scene = ChartScene::build(data, state, config, trend, now);

        let hovered = response
            .hover_pos()
            .map(|pos| pos - origin)
            .and_then(|local| scene.marker_at(local.x, local.y))
            .map(|marker| marker.index);
        state.set_hovered(hovered);
        for marker in &mut scene.markers {
            marker.hovered = Some(marker.index) == hovered;
        }

        ChartPlotter::draw_scene(&painter, response.rect, origin, &scene, &config.markers);

        let mut switched = None;
        for label in &scene.labels {
            let rect = ChartPlotter::label_rect(&painter, origin, label, &config.markers);
            let label_response = ui
                .interact(rect, ui.id().with(("axis_label", label.axis)), Sense::click())
                .on_hover_cursor(CursorIcon::PointingHand);
            ChartPlotter::draw_label(&painter, origin, label, label_response.hovered(), &config.markers);

            if label_response.clicked() && state.select_axis(label.axis, data, now) {
                switched = Some(label.axis);
            }
        }

        if let (Some(record), Some(pointer)) = (hovered.and_then(|i| data.get(i)), response.hover_pos()) {
            let axis = state.chosen_axis();
            let (x, y) = tooltip_anchor((pointer.x, pointer.y), config.markers.tooltip_offset);
            egui::Area::new(ui.id().with("marker_tooltip"))
                .order(egui::Order::Tooltip)
                .fixed_pos(egui::pos2(x, y))
                .pivot(Align2::CENTER_BOTTOM)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(tooltip_text(record, axis));
                    });
                });
        }

        if switched.is_some() || state.is_animating(now) {
            ctx.request_repaint();
        }

        switched
    }
}
