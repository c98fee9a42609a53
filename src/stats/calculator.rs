//! Statistics Calculator Module
//! Correlation and least-squares fit of obesity against the chosen axis.

use crate::data::{CensusData, ChosenAxis};
use statrs::statistics::Statistics;

/// Relationship between the chosen axis and obesity.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSummary {
    pub axis: ChosenAxis,
    /// Number of regions with both values finite.
    pub count: usize,
    /// Pearson correlation coefficient.
    pub pearson_r: f64,
    pub slope: f64,
    pub intercept: f64,
}

impl AxisSummary {
    /// Predicted obesity at `x` on the fitted line.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Handles statistical calculations over the loaded data.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Fit obesity = slope * x + intercept. `None` with fewer than two
    /// complete regions or when either variable is constant.
    pub fn axis_summary(data: &CensusData, axis: ChosenAxis) -> Option<AxisSummary> {
        let (xs, ys) = data.finite_pairs(axis);
        if xs.len() < 2 {
            return None;
        }

        let mean_x = xs.iter().mean();
        let mean_y = ys.iter().mean();
        let sd_x = xs.iter().std_dev();
        let sd_y = ys.iter().std_dev();
        if sd_x == 0.0 || sd_y == 0.0 || !sd_x.is_finite() || !sd_y.is_finite() {
            return None;
        }
        let cov = xs.iter().covariance(ys.iter());

        let slope = cov / (sd_x * sd_x);
        Some(AxisSummary {
            axis,
            count: xs.len(),
            pearson_r: cov / (sd_x * sd_y),
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }
}
