//! Stats module - summary statistics for the chosen axis

mod calculator;

pub use calculator::{AxisSummary, StatsCalculator};
