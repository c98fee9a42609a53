//! Chart configuration.
//!
//! Every field has a default matching the stock chart, so a config file only
//! needs the keys it overrides.

use crate::data::ChosenAxis;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Margins around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 80.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Surface sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width used for headless export when no `--width` is given.
    pub base_width: f32,
    pub min_width: f32,
    pub max_width: f32,
    /// Surface height is `width - width / aspect_divisor`.
    pub aspect_divisor: f32,
    pub margins: Margins,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 1200.0,
            min_width: 480.0,
            max_width: 1600.0,
            aspect_divisor: 2.1,
            margins: Margins::default(),
        }
    }
}

/// Domain padding and tick density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Lower x bound is `min * x_min_factor`.
    pub x_min_factor: f64,
    /// Upper x bound is `max * x_max_factor`.
    pub x_max_factor: f64,
    /// Lower y bound is `min - y_padding`.
    pub y_padding: f64,
    pub tick_count: usize,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            x_min_factor: 0.9,
            x_max_factor: 1.1,
            y_padding: 1.0,
            tick_count: 10,
        }
    }
}

/// Marker and label appearance. Colours are RGB triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub radius: f32,
    pub font_size: f32,
    pub label_font_size: f32,
    pub fill: [u8; 3],
    pub stroke: [u8; 3],
    pub hover_stroke: [u8; 3],
    pub text: [u8; 3],
    pub active_label: [u8; 3],
    pub inactive_label: [u8; 3],
    /// Gap between the pointer and the bottom of a marker tooltip.
    pub tooltip_offset: f32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            font_size: 14.0,
            label_font_size: 18.0,
            fill: [0x89, 0xbd, 0xd3],
            stroke: [0xe3, 0xe3, 0xe3],
            hover_stroke: [0x32, 0x32, 0x32],
            text: [0xff, 0xff, 0xff],
            active_label: [0x00, 0x00, 0x00],
            inactive_label: [0xc9, 0xc9, 0xc9],
            tooltip_offset: 12.0,
        }
    }
}

/// Animation lengths in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub axis_ms: u64,
    pub marker_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            axis_ms: 1000,
            marker_ms: 300,
        }
    }
}

/// Complete chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data_path: PathBuf,
    pub initial_axis: ChosenAxis,
    pub show_trend_line: bool,
    pub layout: LayoutConfig,
    pub scales: ScaleConfig,
    pub markers: MarkerConfig,
    pub transitions: TransitionConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/data.csv"),
            initial_axis: ChosenAxis::Poverty,
            show_trend_line: false,
            layout: LayoutConfig::default(),
            scales: ScaleConfig::default(),
            markers: MarkerConfig::default(),
            transitions: TransitionConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
