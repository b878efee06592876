use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::{PredictorError, Result};

/// Target column name in the dataset file.
pub const WATER_REQUIRED: &str = "Water Required (ml)";

/// One historical observation: three sensor values and the volume of water
/// that was dispensed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrainingRecord {
    #[serde(rename = "Air Temperature (°C)")]
    pub air_temperature: f64,
    #[serde(rename = "Air Humidity (%)")]
    pub air_humidity: f64,
    #[serde(rename = "Light Intensity (lux)")]
    pub light_intensity: f64,
    #[serde(rename = "Water Required (ml)")]
    pub water_required: f64,
}

/// An in-memory training dataset, immutable once loaded.
///
/// Columns are matched by header name, so extra columns in the file are
/// ignored. Values are taken as-is; no range validation is applied.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TrainingRecord>,
}

impl Dataset {
    /// Loads a dataset from a CSV file with a header row.
    ///
    /// # Errors
    /// - `DatasetNotFound` if the file does not exist.
    /// - `DatasetEmpty` if the file has no data rows.
    /// - `Csv` if a row cannot be read or deserialized.
    pub fn from_csv(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PredictorError::DatasetNotFound {
                path: path.to_owned(),
            });
        }

        let mut reader = csv::Reader::from_path(path).map_err(|source| PredictorError::Csv {
            path: path.to_owned(),
            source,
        })?;

        let mut records = Vec::new();
        for record in reader.deserialize() {
            let record: TrainingRecord = record.map_err(|source| PredictorError::Csv {
                path: path.to_owned(),
                source,
            })?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(PredictorError::DatasetEmpty {
                path: path.to_owned(),
            });
        }

        info!("loaded {} records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Builds a dataset from already-materialized records.
    ///
    /// # Panics
    /// Panics if `records` is empty; file loading rejects that case before
    /// construction.
    pub fn from_records(records: Vec<TrainingRecord>) -> Self {
        assert!(!records.is_empty(), "dataset must be non-empty");
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    /// Feature matrix with one row per record, columns in canonical feature
    /// order.
    pub fn features(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.records.len(), 3), |(i, j)| {
            let r = &self.records[i];
            match j {
                0 => r.air_temperature,
                1 => r.air_humidity,
                _ => r.light_intensity,
            }
        })
    }

    /// Target vector, one entry per record.
    pub fn targets(&self) -> Array1<f64> {
        self.records.iter().map(|r| r.water_required).collect()
    }
}
