//! Data Processor Module
//! Coerces a raw CSV DataFrame into typed region records.

use crate::data::RegionRecord;
use crate::error::{ChartError, Result};
use polars::prelude::*;

/// Columns read as text.
pub const TEXT_COLUMNS: [&str; 2] = ["state", "abbr"];

/// Columns coerced to f64.
pub const NUMERIC_COLUMNS: [&str; 4] = ["poverty", "age", "income", "obesity"];

/// Handles conversion of loaded frames into records.
pub struct DataProcessor;

impl DataProcessor {
    /// Build one record per row. Unparseable or empty numeric cells become NaN;
    /// no row is dropped.
    pub fn coerce_records(df: &DataFrame) -> Result<Vec<RegionRecord>> {
        let [state, abbr] = TEXT_COLUMNS.map(|name| Self::text_column(df, name));
        let state = state?;
        let abbr = abbr?;

        let [poverty, age, income, obesity] =
            NUMERIC_COLUMNS.map(|name| Self::numeric_column(df, name));
        let (poverty, age, income, obesity) = (poverty?, age?, income?, obesity?);

        let records = (0..df.height())
            .map(|i| RegionRecord {
                state: state[i].clone(),
                abbr: abbr[i].clone(),
                poverty: poverty[i],
                age: age[i],
                income: income[i],
                obesity: obesity[i],
            })
            .collect();

        Ok(records)
    }

    fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
        df.column(name)
            .map_err(|_| ChartError::missing_column(name))
    }

    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        // Non-strict cast: text that is not a number turns into null.
        let values = Self::column(df, name)?.cast(&DataType::Float64)?;
        let values = values.as_materialized_series().f64()?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
        let values = Self::column(df, name)?.cast(&DataType::String)?;
        let values = values.as_materialized_series().str()?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or_default().trim().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("id".into(), vec![1i64, 2]),
            Column::new("state".into(), vec!["Alabama", "Alaska"]),
            Column::new("abbr".into(), vec!["AL", "AK"]),
            Column::new("poverty".into(), vec!["19.3", "n/a"]),
            Column::new("age".into(), vec![38.6, 33.3]),
            Column::new("income".into(), vec![42830i64, 71583]),
            Column::new("obesity".into(), vec![33.5, 29.7]),
        ])
        .unwrap()
    }

    #[test]
    fn coerces_numeric_text_and_integers() {
        let records = DataProcessor::coerce_records(&frame()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state, "Alabama");
        assert_eq!(records[0].abbr, "AL");
        assert_eq!(records[0].poverty, 19.3);
        assert_eq!(records[1].income, 71583.0);
        assert_eq!(records[1].obesity, 29.7);
    }

    #[test]
    fn unparseable_cell_becomes_nan_without_dropping_row() {
        let records = DataProcessor::coerce_records(&frame()).unwrap();
        assert!(records[1].poverty.is_nan());
        assert_eq!(records[1].abbr, "AK");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = frame().drop("obesity").unwrap();
        let err = DataProcessor::coerce_records(&df).unwrap_err();
        assert!(matches!(err, ChartError::MissingColumn { ref column } if column == "obesity"));
    }
}
