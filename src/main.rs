//! Census Scatter - Demographics vs obesity scatter plot
//!
//! Plots poverty, median age or median household income against obesity
//! for each state. Click an axis label to switch attribute.

mod charts;
mod config;
mod data;
mod error;
mod gui;
mod stats;

use anyhow::{Context, Result};
use charts::StaticChartRenderer;
use clap::Parser;
use config::ChartConfig;
use data::{ChosenAxis, DataLoader};
use eframe::egui;
use gui::CensusScatterApp;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "census-scatter")]
#[command(about = "Interactive scatter plot of state demographics vs obesity", long_about = None)]
struct Args {
    /// CSV file with state, abbr, poverty, age, income and obesity columns
    data: Option<PathBuf>,

    /// Attribute on the x-axis at startup (poverty, age, income)
    #[arg(long)]
    axis: Option<ChosenAxis>,

    /// JSON config file overriding chart defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render to an .svg or .png file and exit without opening a window
    #[arg(long)]
    export: Option<PathBuf>,

    /// Surface width in pixels for --export
    #[arg(long)]
    width: Option<f32>,

    /// Open the exported file with the system viewer
    #[arg(long, requires = "export")]
    open: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log: Option<PathBuf>,
}

fn init_logging(log: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_ref())?;

    let config = match &args.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let data_path = args.data.clone().unwrap_or_else(|| config.data_path.clone());
    let axis = args.axis.unwrap_or(config.initial_axis);

    if let Some(out) = &args.export {
        let mut loader = DataLoader::new();
        let data = loader
            .load_csv(&data_path)
            .with_context(|| format!("Failed to load {}", data_path.display()))?;
        if data.is_empty() {
            tracing::warn!(path = %data_path.display(), "data file has no regions");
        }
        let width = args.width.unwrap_or(config.layout.base_width);
        StaticChartRenderer::export(data, axis, &config, width, out)
            .with_context(|| format!("Failed to export {}", out.display()))?;
        println!("Exported {} regions to {}", data.len(), out.display());

        if args.open {
            open::that(out).with_context(|| format!("Failed to open {}", out.display()))?;
        }
        return Ok(());
    }

    tracing::info!(data = %data_path.display(), %axis, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 820.0])
            .with_min_inner_size([520.0, 420.0])
            .with_title("Census Scatter"),
        ..Default::default()
    };

    eframe::run_native(
        "Census Scatter",
        options,
        Box::new(move |cc| Ok(Box::new(CensusScatterApp::new(cc, config, axis, data_path)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
