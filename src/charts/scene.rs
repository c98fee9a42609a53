//! Renderer-independent description of one chart frame.
//!
//! All coordinates are pixels relative to the top-left corner of the
//! plotting area (inside the margins). The interactive painter and the
//! static exporters both draw from a `ChartScene`, so they always agree on
//! what is on screen.

use crate::charts::scale::{format_tick, LinearScale};
use crate::charts::{ChartLayout, ChartState};
use crate::config::ChartConfig;
use crate::data::{CensusData, ChosenAxis};
use crate::stats::AxisSummary;

/// Title of the fixed y-axis.
pub const Y_TITLE: &str = "Obesity (%)";

/// One axis tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis.
    pub position: f32,
    pub label: String,
}

/// A circle marker for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Index of the record in `CensusData`.
    pub index: usize,
    pub abbr: String,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub hovered: bool,
}

impl Marker {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Clickable attribute label under the x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorLabel {
    pub axis: ChosenAxis,
    pub text: &'static str,
    /// Bottom center of the text.
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Line segment in plotting-area pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// Everything drawn for one frame.
#[derive(Debug, Clone)]
pub struct ChartScene {
    pub layout: ChartLayout,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub markers: Vec<Marker>,
    pub labels: Vec<SelectorLabel>,
    pub trend_line: Option<Segment>,
}

impl ChartScene {
    /// Build the frame at time `now`, mid-transition positions included.
    /// Records whose chosen value or obesity is not finite are not drawn.
    pub fn build(
        data: &CensusData,
        state: &ChartState,
        config: &ChartConfig,
        trend: Option<&AxisSummary>,
        now: f64,
    ) -> Self {
        let layout = *state.layout();
        let axis = state.chosen_axis();
        let x_scale = state.x_scale_at(now);
        let y_scale = *state.y_scale();
        let tick_count = config.scales.tick_count;

        let markers = data
            .records()
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let value = axis.value(record);
                if !value.is_finite() || !record.obesity.is_finite() {
                    return None;
                }
                Some(Marker {
                    index,
                    abbr: record.abbr.clone(),
                    cx: state.marker_x(index, value, now) as f32,
                    cy: y_scale.map(record.obesity) as f32,
                    radius: config.markers.radius,
                    hovered: state.hovered() == Some(index),
                })
            })
            .collect();

        let labels = ChosenAxis::ALL
            .iter()
            .enumerate()
            .map(|(i, &candidate)| {
                let (x, y) = layout.selector_anchor(i);
                SelectorLabel {
                    axis: candidate,
                    text: candidate.label(),
                    x,
                    y,
                    active: candidate == axis,
                }
            })
            .collect();

        let trend_line = trend
            .filter(|summary| summary.axis == axis)
            .and_then(|summary| trend_segment(summary, &x_scale, &y_scale));

        Self {
            layout,
            x_ticks: build_ticks(&x_scale, tick_count),
            y_ticks: build_ticks(&y_scale, tick_count),
            markers,
            labels,
            trend_line,
        }
    }

    /// Topmost marker under a point (plotting-area coordinates).
    pub fn marker_at(&self, x: f32, y: f32) -> Option<&Marker> {
        self.markers.iter().rev().find(|m| m.contains(x, y))
    }

    /// Anchor of the rotated y-axis title.
    pub fn y_title_anchor(&self) -> (f32, f32) {
        (-self.layout.margins.left * 0.6, self.layout.chart_height / 2.0)
    }
}

fn build_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            position: scale.map(value) as f32,
            label: format_tick(value, step),
        })
        .collect()
}

/// Fitted line across the x-domain, clipped to the y-domain.
fn trend_segment(summary: &AxisSummary, x_scale: &LinearScale, y_scale: &LinearScale) -> Option<Segment> {
    let (mut x0, mut x1) = x_scale.domain();
    let (y_lo, y_hi) = {
        let (a, b) = y_scale.domain();
        (a.min(b), a.max(b))
    };

    if summary.slope != 0.0 {
        // x where the line crosses the lower and upper y bounds
        let at_lo = (y_lo - summary.intercept) / summary.slope;
        let at_hi = (y_hi - summary.intercept) / summary.slope;
        let (cross_min, cross_max) = (at_lo.min(at_hi), at_lo.max(at_hi));
        x0 = x0.max(cross_min);
        x1 = x1.min(cross_max);
    } else if !(y_lo..=y_hi).contains(&summary.intercept) {
        return None;
    }

    if x0.is_nan() || x1.is_nan() || x0 >= x1 {
        return None;
    }

    let point = |x: f64| (x_scale.map(x) as f32, y_scale.map(summary.predict(x)) as f32);
    Some(Segment {
        from: point(x0),
        to: point(x1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record;

    fn data() -> CensusData {
        CensusData::new(vec![
            record("AA", 10.0, 30.0, 40000.0, 21.0),
            record("BB", 20.0, 40.0, 60000.0, 35.0),
            record("CC", 15.0, f64::NAN, 50000.0, 28.0),
        ])
    }

    fn active_axis(scene: &ChartScene) -> Option<ChosenAxis> {
        scene.labels.iter().find(|l| l.active).map(|l| l.axis)
    }

    fn state(data: &CensusData, config: &ChartConfig) -> ChartState {
        let layout = ChartLayout::with_width(&config.layout, 1200.0);
        ChartState::new(data, ChosenAxis::Poverty, layout, config)
    }

    #[test]
    fn one_marker_per_drawable_record() {
        let config = ChartConfig::default();
        let data = data();
        let mut state = state(&data, &config);

        let scene = ChartScene::build(&data, &state, &config, None, 0.0);
        assert_eq!(scene.markers.len(), 3);
        assert_eq!(scene.markers[1].abbr, "BB");
        assert_eq!(scene.markers[0].radius, 16.0);

        // CC has no age, so it drops out on the age axis.
        state.select_axis(ChosenAxis::Age, &data, 0.0);
        let scene = ChartScene::build(&data, &state, &config, None, 10.0);
        let abbrs: Vec<&str> = scene.markers.iter().map(|m| m.abbr.as_str()).collect();
        assert_eq!(abbrs, ["AA", "BB"]);
    }

    #[test]
    fn markers_sit_on_the_scales() {
        let config = ChartConfig::default();
        let data = data();
        let state = state(&data, &config);
        let scene = ChartScene::build(&data, &state, &config, None, 0.0);

        let bb = &scene.markers[1];
        assert!((bb.cx as f64 - state.x_scale().map(20.0)).abs() < 1e-3);
        // highest obesity sits on the top edge
        assert!(bb.cy.abs() < 1e-3);
    }

    #[test]
    fn exactly_one_active_label_matching_chosen_axis() {
        let config = ChartConfig::default();
        let data = data();
        let mut state = state(&data, &config);

        let scene = ChartScene::build(&data, &state, &config, None, 0.0);
        assert_eq!(scene.labels.len(), 3);
        assert_eq!(scene.labels.iter().filter(|l| l.active).count(), 1);
        assert_eq!(active_axis(&scene), Some(ChosenAxis::Poverty));

        state.select_axis(ChosenAxis::Income, &data, 0.0);
        let scene = ChartScene::build(&data, &state, &config, None, 0.0);
        assert_eq!(scene.labels.iter().filter(|l| l.active).count(), 1);
        assert_eq!(active_axis(&scene), Some(ChosenAxis::Income));
        assert_eq!(scene.labels[2].text, "Household Income (Median)");
    }

    #[test]
    fn rebuilding_after_resizes_never_duplicates() {
        let config = ChartConfig::default();
        let data = data();
        let mut state = state(&data, &config);

        for width in [900.0, 1300.0, 700.0, 1200.0] {
            state.resize(ChartLayout::with_width(&config.layout, width), &data);
            let scene = ChartScene::build(&data, &state, &config, None, 0.0);
            assert_eq!(scene.markers.len(), 3);
            assert_eq!(scene.labels.len(), 3);
            assert_eq!(scene.layout.width, width);
            let max_x = scene.markers.iter().map(|m| m.cx).fold(f32::MIN, f32::max);
            assert!(max_x <= scene.layout.chart_width);
        }
    }

    #[test]
    fn ticks_are_inside_the_plotting_area() {
        let config = ChartConfig::default();
        let data = data();
        let state = state(&data, &config);
        let scene = ChartScene::build(&data, &state, &config, None, 0.0);

        assert!(!scene.x_ticks.is_empty());
        assert!(!scene.y_ticks.is_empty());
        for tick in &scene.x_ticks {
            assert!(tick.position >= -1e-3 && tick.position <= scene.layout.chart_width + 1e-3);
        }
        assert_eq!(scene.y_ticks[0].label, "20");
    }

    #[test]
    fn hit_test_finds_marker_under_point() {
        let config = ChartConfig::default();
        let data = data();
        let mut state = state(&data, &config);
        state.set_hovered(Some(1));
        let scene = ChartScene::build(&data, &state, &config, None, 0.0);

        let bb = &scene.markers[1];
        assert!(bb.hovered);
        assert_eq!(scene.marker_at(bb.cx + 10.0, bb.cy).map(|m| m.index), Some(1));
        assert_eq!(scene.marker_at(bb.cx + 17.0, bb.cy + 17.0), None);
    }

    #[test]
    fn trend_line_only_for_matching_axis() {
        let config = ChartConfig::default();
        let data = data();
        let state = state(&data, &config);
        let summary = AxisSummary {
            axis: ChosenAxis::Poverty,
            count: 3,
            pearson_r: 1.0,
            slope: 1.4,
            intercept: 7.0,
        };

        let scene = ChartScene::build(&data, &state, &config, Some(&summary), 0.0);
        let segment = scene.trend_line.unwrap();
        assert!(segment.from.0 < segment.to.0);
        assert!(segment.from.1 > segment.to.1);

        let other = AxisSummary { axis: ChosenAxis::Age, ..summary };
        let scene = ChartScene::build(&data, &state, &config, Some(&other), 0.0);
        assert!(scene.trend_line.is_none());
    }
}
