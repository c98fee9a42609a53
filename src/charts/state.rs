//! Interactive chart state: chosen axis, scales, running transitions.

use crate::charts::scale::{x_scale, y_scale, LinearScale};
use crate::charts::{ChartLayout, Transition};
use crate::config::{ChartConfig, ScaleConfig, TransitionConfig};
use crate::data::{CensusData, ChosenAxis};

/// Where the x-axis was when the running axis transition started.
#[derive(Debug, Clone)]
struct AxisMotion {
    from: LinearScale,
    transition: Transition,
}

/// Per-record marker x positions when the running marker transition started.
#[derive(Debug, Clone)]
struct MarkerMotion {
    from: Vec<f64>,
    transition: Transition,
}

/// Everything that changes while the user interacts with a loaded chart.
#[derive(Debug, Clone)]
pub struct ChartState {
    chosen_axis: ChosenAxis,
    layout: ChartLayout,
    x_scale: LinearScale,
    y_scale: LinearScale,
    axis_motion: Option<AxisMotion>,
    marker_motion: Option<MarkerMotion>,
    hovered: Option<usize>,
    scales: ScaleConfig,
    transitions: TransitionConfig,
}

impl ChartState {
    pub fn new(data: &CensusData, axis: ChosenAxis, layout: ChartLayout, config: &ChartConfig) -> Self {
        let scales = config.scales.clone();
        Self {
            chosen_axis: axis,
            layout,
            x_scale: x_scale(data, axis, layout.chart_width as f64, &scales),
            y_scale: y_scale(data, layout.chart_height as f64, &scales),
            axis_motion: None,
            marker_motion: None,
            hovered: None,
            scales,
            transitions: config.transitions.clone(),
        }
    }

    pub fn chosen_axis(&self) -> ChosenAxis {
        self.chosen_axis
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Final x-scale for the chosen axis.
    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: Option<usize>) {
        self.hovered = hovered;
    }

    /// X-scale as drawn at `now`, part way through an axis transition.
    pub fn x_scale_at(&self, now: f64) -> LinearScale {
        match &self.axis_motion {
            Some(motion) => motion.from.lerp(&self.x_scale, motion.transition.progress(now)),
            None => self.x_scale,
        }
    }

    /// X pixel of a record's marker at `now`.
    pub fn marker_x(&self, index: usize, value: f64, now: f64) -> f64 {
        let target = self.x_scale.map(value);
        match &self.marker_motion {
            Some(motion) => match motion.from.get(index) {
                Some(&from) if from.is_finite() && target.is_finite() => {
                    let t = motion.transition.progress(now);
                    if t >= 1.0 {
                        target
                    } else {
                        from + (target - from) * t
                    }
                }
                _ => target,
            },
            None => target,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        let axis = self
            .axis_motion
            .as_ref()
            .is_some_and(|m| !m.transition.is_finished(now));
        let markers = self
            .marker_motion
            .as_ref()
            .is_some_and(|m| !m.transition.is_finished(now));
        axis || markers
    }

    /// Switch the x-axis attribute. Returns false when `axis` is already
    /// chosen; otherwise starts the axis and marker transitions from
    /// wherever they are drawn at `now`.
    pub fn select_axis(&mut self, axis: ChosenAxis, data: &CensusData, now: f64) -> bool {
        if axis == self.chosen_axis {
            return false;
        }

        let from_scale = self.x_scale_at(now);
        let from_x: Vec<f64> = data
            .records()
            .iter()
            .enumerate()
            .map(|(i, r)| self.marker_x(i, self.chosen_axis.value(r), now))
            .collect();

        tracing::info!(from = %self.chosen_axis, to = %axis, "x-axis switched");

        self.chosen_axis = axis;
        self.x_scale = x_scale(data, axis, self.layout.chart_width as f64, &self.scales);
        self.axis_motion = Some(AxisMotion {
            from: from_scale,
            transition: Transition::new(now, self.transitions.axis_ms),
        });
        self.marker_motion = Some(MarkerMotion {
            from: from_x,
            transition: Transition::new(now, self.transitions.marker_ms),
        });
        true
    }

    /// Rebuild scales for a new surface size. Running transitions snap to
    /// their end. Returns false when the size did not change.
    pub fn resize(&mut self, layout: ChartLayout, data: &CensusData) -> bool {
        if self.layout.same_size(&layout) {
            return false;
        }

        tracing::debug!(width = layout.width, height = layout.height, "chart rebuilt for new size");

        self.layout = layout;
        self.x_scale = x_scale(data, self.chosen_axis, layout.chart_width as f64, &self.scales);
        self.y_scale = y_scale(data, layout.chart_height as f64, &self.scales);
        self.axis_motion = None;
        self.marker_motion = None;
        self.hovered = None;
        true
    }

    /// Drop finished transitions.
    pub fn settle(&mut self, now: f64) {
        if self.axis_motion.as_ref().is_some_and(|m| m.transition.is_finished(now)) {
            self.axis_motion = None;
        }
        if self.marker_motion.as_ref().is_some_and(|m| m.transition.is_finished(now)) {
            self.marker_motion = None;
        }
    }
}
