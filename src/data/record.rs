//! Region records and the attribute selectable for the x-axis.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of census data for a state.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub state: String,
    pub abbr: String,
    /// Share of population in poverty (%).
    pub poverty: f64,
    /// Median age.
    pub age: f64,
    /// Median household income.
    pub income: f64,
    /// Obesity rate (%).
    pub obesity: f64,
}

/// Attribute plotted on the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChosenAxis {
    #[default]
    Poverty,
    Age,
    Income,
}

impl ChosenAxis {
    /// All selectable axes in the order their labels are stacked.
    pub const ALL: [ChosenAxis; 3] = [ChosenAxis::Poverty, ChosenAxis::Age, ChosenAxis::Income];

    /// CSV column holding this attribute.
    pub fn column(self) -> &'static str {
        match self {
            ChosenAxis::Poverty => "poverty",
            ChosenAxis::Age => "age",
            ChosenAxis::Income => "income",
        }
    }

    /// Text of the clickable selector label under the x-axis.
    pub fn label(self) -> &'static str {
        match self {
            ChosenAxis::Poverty => "In Poverty (%)",
            ChosenAxis::Age => "Age (Median)",
            ChosenAxis::Income => "Household Income (Median)",
        }
    }

    /// Prefix used for the value line of a tooltip.
    pub fn tooltip_label(self) -> &'static str {
        match self {
            ChosenAxis::Poverty => "In Poverty %",
            ChosenAxis::Age => "Age Median",
            ChosenAxis::Income => "Household Income Median",
        }
    }

    /// Read this attribute from a record.
    pub fn value(self, record: &RegionRecord) -> f64 {
        match self {
            ChosenAxis::Poverty => record.poverty,
            ChosenAxis::Age => record.age,
            ChosenAxis::Income => record.income,
        }
    }
}

impl fmt::Display for ChosenAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ChosenAxis {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poverty" => Ok(ChosenAxis::Poverty),
            "age" => Ok(ChosenAxis::Age),
            "income" => Ok(ChosenAxis::Income),
            other => Err(ChartError::UnknownAxis(other.to_string())),
        }
    }
}

/// Ordered, load-once collection of region records.
#[derive(Debug, Clone, Default)]
pub struct CensusData {
    records: Vec<RegionRecord>,
}

impl CensusData {
    pub fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RegionRecord> {
        self.records.get(index)
    }

    /// Min and max of a field, skipping NaN. `None` when no value is finite.
    pub fn extent<F>(&self, accessor: F) -> Option<(f64, f64)>
    where
        F: Fn(&RegionRecord) -> f64,
    {
        self.records
            .iter()
            .map(accessor)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// (x, obesity) pairs for the chosen axis where both are finite.
    pub fn finite_pairs(&self, axis: ChosenAxis) -> (Vec<f64>, Vec<f64>) {
        self.records
            .iter()
            .map(|r| (axis.value(r), r.obesity))
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .unzip()
    }
}

#[cfg(test)]
pub(crate) fn record(abbr: &str, poverty: f64, age: f64, income: f64, obesity: f64) -> RegionRecord {
    RegionRecord {
        state: format!("State {abbr}"),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
    }
}
