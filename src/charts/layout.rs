//! Drawing surface sizing.

use crate::config::{LayoutConfig, Margins};

/// Size of the drawing surface and the plotting area inside its margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    pub chart_width: f32,
    pub chart_height: f32,
}

impl ChartLayout {
    /// Surface of a given width; height follows the configured aspect.
    pub fn with_width(config: &LayoutConfig, width: f32) -> Self {
        let height = width - width / config.aspect_divisor;
        let margins = config.margins;
        Self {
            width,
            height,
            margins,
            chart_width: (width - margins.left - margins.right).max(0.0),
            chart_height: (height - margins.top - margins.bottom).max(0.0),
        }
    }

    /// Largest surface that fits the available space, clamped to the
    /// configured width bounds.
    pub fn fit(config: &LayoutConfig, available_width: f32, available_height: f32) -> Self {
        let height_ratio = 1.0 - 1.0 / config.aspect_divisor;
        let mut width = available_width.clamp(config.min_width, config.max_width);
        if available_height.is_finite() && available_height > 0.0 && width * height_ratio > available_height {
            width = (available_height / height_ratio).max(config.min_width);
        }
        Self::with_width(config, width)
    }

    /// Anchor of the n-th selector label, relative to the plotting area.
    /// `y` is the text baseline, so the label sits above it.
    pub fn selector_anchor(&self, index: usize) -> (f32, f32) {
        (
            self.chart_width / 2.0,
            self.chart_height + 20.0 + 20.0 * (index as f32 + 1.0),
        )
    }

    /// Two layouts differing by less than a pixel are the same surface.
    pub fn same_size(&self, other: &ChartLayout) -> bool {
        (self.width - other.width).abs() < 0.5 && (self.height - other.height).abs() < 0.5
    }
}
