//! Navigation Bar Widget
//! Top bar with file, export and axis controls. Collapses into a single
//! menu button on narrow windows.

use crate::data::ChosenAxis;
use crate::stats::AxisSummary;
use egui::{Color32, ComboBox, RichText};

/// Below this window width the bar collapses into a menu button.
pub const COLLAPSE_WIDTH: f32 = 720.0;

/// Top navigation bar state.
pub struct NavBar {
    pub show_trend_line: bool,
    pub status: String,
    pub summary: String,
}

impl NavBar {
    pub fn new(show_trend_line: bool) -> Self {
        Self {
            show_trend_line,
            status: "Ready".to_string(),
            summary: String::new(),
        }
    }

    pub fn is_collapsed(width: f32) -> bool {
        width < COLLAPSE_WIDTH
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Show the fit of the current axis, or clear it.
    pub fn set_summary(&mut self, summary: Option<&AxisSummary>) {
        self.summary = summary
            .map(|s| format!("r = {:.3} (n = {})", s.pearson_r, s.count))
            .unwrap_or_default();
    }

    /// Draw the bar.
    pub fn show(&mut self, ui: &mut egui::Ui, chosen: Option<ChosenAxis>) -> NavAction {
        let mut action = NavAction::None;
        let collapsed = Self::is_collapsed(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("📊 Census Scatter")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );

            if collapsed {
                ui.menu_button("☰", |ui| {
                    ui.vertical(|ui| {
                        self.items(ui, chosen, &mut action);
                    });
                    if action != NavAction::None {
                        ui.close_menu();
                    }
                });
            } else {
                ui.separator();
                self.items(ui, chosen, &mut action);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status_color = if self.status.starts_with("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&self.status).size(11.0).color(status_color));
                if !self.summary.is_empty() && !collapsed {
                    ui.separator();
                    ui.label(RichText::new(&self.summary).size(11.0));
                }
            });
        });

        action
    }

    fn items(&mut self, ui: &mut egui::Ui, chosen: Option<ChosenAxis>, action: &mut NavAction) {
        let has_chart = chosen.is_some();

        if ui.button("📂 Open CSV").clicked() {
            *action = NavAction::OpenCsv;
        }
        ui.add_enabled_ui(has_chart, |ui| {
            if ui.button("🖼 Export SVG").clicked() {
                *action = NavAction::ExportSvg;
            }
            if ui.button("🖼 Export PNG").clicked() {
                *action = NavAction::ExportPng;
            }
        });

        if ui.checkbox(&mut self.show_trend_line, "Trend line").changed() {
            *action = NavAction::ToggleTrendLine;
        }

        if let Some(current) = chosen {
            ComboBox::from_id_salt("x_axis_picker")
                .width(190.0)
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for axis in ChosenAxis::ALL {
                        if ui.selectable_label(current == axis, axis.label()).clicked() && current != axis {
                            *action = NavAction::SelectAxis(axis);
                        }
                    }
                });
        }
    }
}

/// Actions triggered by the navigation bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    None,
    OpenCsv,
    ExportSvg,
    ExportPng,
    ToggleTrendLine,
    SelectAxis(ChosenAxis),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_below_threshold() {
        assert!(NavBar::is_collapsed(600.0));
        assert!(!NavBar::is_collapsed(COLLAPSE_WIDTH));
        assert!(!NavBar::is_collapsed(1400.0));
    }

    #[test]
    fn summary_text_formats_fit() {
        let mut bar = NavBar::new(false);
        let summary = AxisSummary {
            axis: ChosenAxis::Poverty,
            count: 51,
            pearson_r: 0.4568,
            slope: 0.7,
            intercept: 20.0,
        };
        bar.set_summary(Some(&summary));
        assert_eq!(bar.summary, "r = 0.457 (n = 51)");
        bar.set_summary(None);
        assert!(bar.summary.is_empty());
    }
}
