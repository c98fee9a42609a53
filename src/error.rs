//! Error types for Census Scatter.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while loading, configuring, or rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Failed to read or parse the CSV file.
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),

    /// A column the chart needs is absent from the data file.
    #[error("Missing column '{column}' in data file")]
    MissingColumn { column: String },

    /// Nothing has been loaded yet.
    #[error("No data loaded")]
    EmptyData,

    /// Axis name not one of poverty, age, income.
    #[error("Unknown axis '{0}' (expected poverty, age or income)")]
    UnknownAxis(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Static export failed inside the drawing backend.
    #[error("Render error: {0}")]
    Render(String),

    /// Export target has an extension we cannot draw to.
    #[error("Unsupported export format: {}", path.display())]
    UnsupportedExport { path: PathBuf },
}

impl ChartError {
    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Wrap a drawing backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
