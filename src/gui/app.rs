//! Census Scatter Main Application
//! Main window with navigation bar and chart viewer.

use crate::charts::{ExportFormat, StaticChartRenderer};
use crate::config::ChartConfig;
use crate::data::{CensusData, ChosenAxis, DataLoader};
use crate::gui::{ChartViewer, NavAction, NavBar};
use crate::stats::{AxisSummary, StatsCalculator};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete { data: CensusData, path: PathBuf },
    Error(String),
}

/// Main application window.
pub struct CensusScatterApp {
    config: ChartConfig,
    initial_axis: ChosenAxis,
    loader: DataLoader,
    nav_bar: NavBar,
    chart_viewer: ChartViewer,
    summary: Option<AxisSummary>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl CensusScatterApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: ChartConfig,
        initial_axis: ChosenAxis,
        data_path: PathBuf,
    ) -> Self {
        let mut app = Self {
            nav_bar: NavBar::new(config.show_trend_line),
            config,
            initial_axis,
            loader: DataLoader::new(),
            chart_viewer: ChartViewer::new(),
            summary: None,
            load_rx: None,
            is_loading: false,
        };
        app.start_load(data_path);
        app
    }

    /// Read a CSV file on a background thread.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }

        self.nav_bar
            .set_status(&format!("Loading {}...", path.display()));
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DataLoader::read_census(&path) {
                Ok(data) => LoadResult::Complete { data, path },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { data, path }) => {
                self.loader.set_data(data, path);
                self.chart_viewer.clear();
                self.refresh_summary(self.initial_axis);

                let name = self
                    .loader
                    .get_file_path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let status = format!("Loaded {} regions from {}", self.loader.get_row_count(), name);
                self.nav_bar.set_status(&status);
                self.is_loading = false;
            }
            Ok(LoadResult::Error(error)) => {
                tracing::error!(%error, "census data load failed");
                self.nav_bar.set_status(&format!("Error: {}", error));
                self.is_loading = false;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.nav_bar.set_status("Error: loader stopped unexpectedly");
                self.is_loading = false;
            }
        }
    }

    fn refresh_summary(&mut self, axis: ChosenAxis) {
        self.summary = self
            .loader
            .get_data()
            .and_then(|data| StatsCalculator::axis_summary(data, axis));
        self.nav_bar.set_summary(self.summary.as_ref());
    }

    /// Handle CSV file selection
    fn handle_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Export the current axis at the configured base width.
    fn handle_export(&mut self, format: ExportFormat) {
        let (Some(data), Some(axis)) = (self.loader.get_data(), self.chart_viewer.chosen_axis()) else {
            self.nav_bar.set_status("No chart to export");
            return;
        };

        let (filter, extension) = match format {
            ExportFormat::Svg => ("SVG Image", "svg"),
            ExportFormat::Png => ("PNG Image", "png"),
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, &[extension])
            .set_file_name(format!("census_{}.{}", axis, extension))
            .save_file()
        else {
            return;
        };

        let mut config = self.config.clone();
        config.show_trend_line = self.nav_bar.show_trend_line;
        let width = config.layout.base_width;

        match StaticChartRenderer::export(data, axis, &config, width, &path) {
            Ok(()) => self
                .nav_bar
                .set_status(&format!("Exported {}", path.display())),
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.nav_bar.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for CensusScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();
        if self.is_loading {
            ctx.request_repaint();
        }

        let now = ctx.input(|i| i.time);

        // Top panel - Navigation bar
        let action = egui::TopBottomPanel::top("nav_bar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = self.nav_bar.show(ui, self.chart_viewer.chosen_axis());
                ui.add_space(4.0);
                action
            })
            .inner;

        match action {
            NavAction::OpenCsv => self.handle_open_csv(),
            NavAction::ExportSvg => self.handle_export(ExportFormat::Svg),
            NavAction::ExportPng => self.handle_export(ExportFormat::Png),
            NavAction::ToggleTrendLine => {}
            NavAction::SelectAxis(axis) => {
                if let Some(data) = self.loader.get_data() {
                    if self.chart_viewer.select_axis(axis, data, now) {
                        self.refresh_summary(axis);
                        ctx.request_repaint();
                    }
                }
            }
            NavAction::None => {}
        }

        // Central panel - Chart
        egui::CentralPanel::default().show(ctx, |ui| {
            let trend = self.summary.as_ref().filter(|_| self.nav_bar.show_trend_line);
            let switched = egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.chart_viewer.show(
                        ctx,
                        ui,
                        self.loader.get_data(),
                        &self.config,
                        self.initial_axis,
                        trend,
                    )
                })
                .inner;

            if let Some(axis) = switched {
                self.refresh_summary(axis);
            }
        });
    }
}
