//! Static Chart Renderer
//! Draws a `ChartScene` to SVG or PNG through plotters.
//!
//! SVG output needs no system fonts; PNG output rasterises text with the
//! fonts plotters finds on the machine.

use crate::charts::scene::{ChartScene, Y_TITLE};
use crate::charts::{ChartLayout, ChartState};
use crate::config::{ChartConfig, MarkerConfig};
use crate::data::{CensusData, ChosenAxis};
use crate::error::{ChartError, Result};
use crate::stats::StatsCalculator;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;

const FONT: &str = "sans-serif";
const AXIS: RGBColor = RGBColor(0x33, 0x33, 0x33);
const TREND: RGBColor = RGBColor(0xc0, 0x50, 0x50);
const TICK_SIZE: i32 = 6;
const TICK_FONT_SIZE: f64 = 12.0;

/// Output format picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("svg") => Ok(ExportFormat::Svg),
            Some("png") => Ok(ExportFormat::Png),
            _ => Err(ChartError::UnsupportedExport {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the settled chart for `axis` at `width` pixels into `path`.
    pub fn export(
        data: &CensusData,
        axis: ChosenAxis,
        config: &ChartConfig,
        width: f32,
        path: &Path,
    ) -> Result<()> {
        let format = ExportFormat::from_path(path)?;
        let layout = ChartLayout::with_width(&config.layout, width);
        let state = ChartState::new(data, axis, layout, config);
        let trend = if config.show_trend_line {
            StatsCalculator::axis_summary(data, axis)
        } else {
            None
        };
        let scene = ChartScene::build(data, &state, config, trend.as_ref(), 0.0);

        match format {
            ExportFormat::Svg => Self::render_svg(&scene, &config.markers, path)?,
            ExportFormat::Png => Self::render_png(&scene, &config.markers, path)?,
        }
        tracing::info!(path = %path.display(), axis = %axis, "chart exported");
        Ok(())
    }

    pub fn render_svg(scene: &ChartScene, style: &MarkerConfig, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, Self::surface_size(scene)).into_drawing_area();
        Self::draw(&root, scene, style)?;
        root.present().map_err(ChartError::render)
    }

    pub fn render_png(scene: &ChartScene, style: &MarkerConfig, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, Self::surface_size(scene)).into_drawing_area();
        Self::draw(&root, scene, style)?;
        root.present().map_err(ChartError::render)
    }

    fn surface_size(scene: &ChartScene) -> (u32, u32) {
        (
            scene.layout.width.round().max(1.0) as u32,
            scene.layout.height.round().max(1.0) as u32,
        )
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        scene: &ChartScene,
        style: &MarkerConfig,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(ChartError::render)?;

        let ox = scene.layout.margins.left;
        let oy = scene.layout.margins.top;
        let at = |x: f32, y: f32| ((ox + x).round() as i32, (oy + y).round() as i32);
        let w = scene.layout.chart_width;
        let h = scene.layout.chart_height;

        let axis_line = AXIS.stroke_width(1);
        let tick_font = (FONT, TICK_FONT_SIZE).into_font().color(&AXIS);

        // x-axis
        root.draw(&PathElement::new(vec![at(0.0, h), at(w, h)], axis_line))
            .map_err(ChartError::render)?;
        for tick in &scene.x_ticks {
            let (x, y) = at(tick.position, h);
            root.draw(&PathElement::new(vec![(x, y), (x, y + TICK_SIZE)], axis_line))
                .map_err(ChartError::render)?;
            root.draw(&Text::new(
                tick.label.clone(),
                (x, y + TICK_SIZE + 3),
                tick_font.pos(Pos::new(HPos::Center, VPos::Top)),
            ))
            .map_err(ChartError::render)?;
        }

        // y-axis
        root.draw(&PathElement::new(vec![at(0.0, 0.0), at(0.0, h)], axis_line))
            .map_err(ChartError::render)?;
        for tick in &scene.y_ticks {
            let (x, y) = at(0.0, tick.position);
            root.draw(&PathElement::new(vec![(x - TICK_SIZE, y), (x, y)], axis_line))
                .map_err(ChartError::render)?;
            root.draw(&Text::new(
                tick.label.clone(),
                (x - TICK_SIZE - 3, y),
                tick_font.pos(Pos::new(HPos::Right, VPos::Center)),
            ))
            .map_err(ChartError::render)?;
        }

        if let Some(segment) = scene.trend_line {
            root.draw(&PathElement::new(
                vec![at(segment.from.0, segment.from.1), at(segment.to.0, segment.to.1)],
                TREND.stroke_width(2),
            ))
            .map_err(ChartError::render)?;
        }

        // markers
        let fill = rgb(style.fill).filled();
        let stroke = rgb(style.stroke).stroke_width(1);
        let abbr_font = (FONT, style.font_size as f64)
            .into_font()
            .color(&rgb(style.text))
            .pos(Pos::new(HPos::Center, VPos::Center));
        for marker in &scene.markers {
            let center = at(marker.cx, marker.cy);
            let radius = marker.radius.round() as i32;
            root.draw(&Circle::new(center, radius, fill)).map_err(ChartError::render)?;
            root.draw(&Circle::new(center, radius, stroke)).map_err(ChartError::render)?;
            root.draw(&Text::new(marker.abbr.clone(), center, abbr_font.clone()))
                .map_err(ChartError::render)?;
        }

        // selector labels
        for label in &scene.labels {
            let (font, colour) = if label.active {
                (
                    (FONT, style.label_font_size as f64).into_font().style(FontStyle::Bold),
                    rgb(style.active_label),
                )
            } else {
                (
                    (FONT, style.label_font_size as f64).into_font(),
                    rgb(style.inactive_label),
                )
            };
            root.draw(&Text::new(
                label.text.to_string(),
                at(label.x, label.y),
                font.color(&colour).pos(Pos::new(HPos::Center, VPos::Bottom)),
            ))
            .map_err(ChartError::render)?;
        }

        let (tx, ty) = scene.y_title_anchor();
        root.draw(&Text::new(
            Y_TITLE.to_string(),
            at(tx, ty),
            (FONT, style.label_font_size as f64)
                .into_font()
                .transform(FontTransform::Rotate270)
                .color(&rgb(style.active_label))
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))
        .map_err(ChartError::render)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record;

    fn data() -> CensusData {
        CensusData::new(vec![
            record("AL", 19.3, 38.6, 42830.0, 33.5),
            record("AK", 11.2, 33.3, 71583.0, 29.7),
            record("AZ", 18.2, 36.9, 50255.0, 28.9),
        ])
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a/chart.svg")).unwrap(), ExportFormat::Svg);
        assert_eq!(ExportFormat::from_path(Path::new("chart.PNG")).unwrap(), ExportFormat::Png);
        assert!(matches!(
            ExportFormat::from_path(Path::new("chart.pdf")),
            Err(ChartError::UnsupportedExport { .. })
        ));
    }

    #[test]
    fn svg_export_draws_every_marker_and_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let config = ChartConfig::default();

        StaticChartRenderer::export(&data(), ChosenAxis::Income, &config, 1200.0, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        // fill + outline per marker
        assert_eq!(svg.matches("<circle").count(), 6);
        for text in ["AL", "AK", "AZ", "Household Income (Median)", "Age (Median)", "Obesity (%)"] {
            assert!(svg.contains(text), "missing {text}");
        }
        assert!(svg.contains("width=\"1200\""));
    }

    #[test]
    fn unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.gif");
        let err = StaticChartRenderer::export(&data(), ChosenAxis::Age, &ChartConfig::default(), 800.0, &path)
            .unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedExport { .. }));
        assert!(!path.exists());
    }
}
