//! Water-volume prediction for an automated irrigation pump.
//!
//! A linear regression is fitted offline from a CSV of historical sensor
//! readings (air temperature, air humidity, light intensity) against the
//! water dispensed, persisted as a JSON artifact, and replayed to map one
//! sensor reading to a single milliliter volume.
//!
//! The crate is consumed two ways: as a library (an embedding controller
//! builds a [`SensorReading`] and calls [`Predictor::predict`]) and through
//! the `pump-predictor` binary, which prints the bare integer for a caller
//! that invokes it as a subprocess.

pub mod artifact;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod model;
pub mod predictor;
pub mod reading;
pub mod trainer;

pub use artifact::{ArtifactStore, FsArtifactStore, MemoryArtifactStore, ModelArtifact};
pub use dataset::{Dataset, TrainingRecord};
pub use error::{PredictorError, Result};
pub use model::{FitMetrics, LinearModel};
pub use predictor::Predictor;
pub use reading::SensorReading;
