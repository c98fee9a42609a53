//! CSV Data Loader Module
//! Handles CSV file loading using Polars.

use crate::data::{CensusData, DataProcessor};
use crate::error::{ChartError, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Loads census CSV files and keeps the current data set.
pub struct DataLoader {
    data: Option<CensusData>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            data: None,
            file_path: None,
        }
    }

    /// Load a CSV file and replace the current data set.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&CensusData> {
        let data = Self::read_census(file_path)?;
        self.file_path = Some(file_path.to_path_buf());
        self.data = Some(data);
        self.data.as_ref().ok_or(ChartError::EmptyData)
    }

    /// Read and coerce a CSV file without touching loader state.
    /// Safe to call from a background thread.
    pub fn read_census(file_path: &Path) -> Result<CensusData> {
        if !file_path.is_file() {
            return Err(ChartError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", file_path.display()),
            )));
        }

        tracing::debug!(path = %file_path.display(), "reading census csv");

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let records = DataProcessor::coerce_records(&df)?;
        tracing::info!(
            path = %file_path.display(),
            rows = records.len(),
            "census data loaded"
        );
        Ok(CensusData::new(records))
    }

    /// Currently loaded data set.
    pub fn get_data(&self) -> Option<&CensusData> {
        self.data.as_ref()
    }

    /// Number of loaded regions.
    pub fn get_row_count(&self) -> usize {
        self.data.as_ref().map(CensusData::len).unwrap_or(0)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Set data directly (used for async loading)
    pub fn set_data(&mut self, data: CensusData, file_path: PathBuf) {
        self.data = Some(data);
        self.file_path = Some(file_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "\
id,state,abbr,poverty,povertyMoe,age,ageMoe,income,incomeMoe,obesity
1,Alabama,AL,19.3,0.5,38.6,0.2,42830,598,33.5
2,Alaska,AK,11.2,0.9,33.3,0.3,71583,1784,29.7
4,Arkansas,AR,18.9,0.6,37.9,0.2,41371,622,35.9
";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = write_csv(CSV);
        let mut loader = DataLoader::new();
        let data = loader.load_csv(file.path()).unwrap();

        let abbrs: Vec<&str> = data.records().iter().map(|r| r.abbr.as_str()).collect();
        assert_eq!(abbrs, ["AL", "AK", "AR"]);
        assert_eq!(data.records()[2].obesity, 35.9);
        assert_eq!(loader.get_row_count(), 3);
        assert_eq!(loader.get_file_path().map(|p| p.as_path()), Some(file.path()));
    }

    #[test]
    fn header_only_file_loads_empty_data() {
        let file = write_csv("state,abbr,poverty,age,income,obesity\n");
        let data = DataLoader::read_census(file.path()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn empty_numeric_cell_reads_as_nan() {
        let file = write_csv("state,abbr,poverty,age,income,obesity\nAlabama,AL,,38.6,42830,33.5\n");
        let data = DataLoader::read_census(file.path()).unwrap();
        let record = &data.records()[0];
        assert!(record.poverty.is_nan());
        assert_eq!(record.age, 38.6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DataLoader::read_census(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }

    #[test]
    fn failed_load_keeps_previous_data() {
        let file = write_csv(CSV);
        let mut loader = DataLoader::new();
        loader.load_csv(file.path()).unwrap();

        let bad = write_csv("state,abbr,poverty\nX,XX,1\n");
        assert!(loader.load_csv(bad.path()).is_err());
        assert_eq!(loader.get_row_count(), 3);
    }
}
