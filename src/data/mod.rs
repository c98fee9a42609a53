//! Data module - CSV loading and record coercion

mod loader;
mod processor;
mod record;

pub use loader::DataLoader;
pub use processor::DataProcessor;
pub use record::{CensusData, ChosenAxis, RegionRecord};

#[cfg(test)]
pub(crate) use record::record;
