use std::path::Path;

use log::info;
use ndarray::Array1;

use crate::artifact::{ArtifactStore, ModelArtifact};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::reading::SensorReading;
use crate::trainer;

/// Scores sensor readings against a validated artifact.
#[derive(Debug, Clone)]
pub struct Predictor {
    artifact: ModelArtifact,
    coefficients: Array1<f64>,
}

impl Predictor {
    /// Wraps an artifact after checking its invariants.
    ///
    /// # Errors
    /// Returns an error if the artifact's feature order or coefficient count
    /// is invalid.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;
        let coefficients = Array1::from_vec(artifact.coefficients.clone());
        Ok(Self {
            artifact,
            coefficients,
        })
    }

    /// Uses the stored artifact if one exists, otherwise trains a fresh one
    /// from the dataset and persists it before use.
    ///
    /// # Errors
    /// Propagates store failures, dataset loading failures when training is
    /// needed, and artifact validation failures.
    pub fn load_or_train(store: &mut dyn ArtifactStore, dataset_path: &Path) -> Result<Self> {
        let artifact = match store.load()? {
            Some(artifact) => artifact,
            None => {
                info!("no stored model, training from {}", dataset_path.display());
                let dataset = Dataset::from_csv(dataset_path)?;
                let (artifact, _metrics) = trainer::fit(&dataset);
                store.save(&artifact)?;
                artifact
            }
        };
        Self::from_artifact(artifact)
    }

    /// Predicted water volume in milliliters for one reading.
    ///
    /// Missing reading fields resolve to their declared defaults. The raw
    /// regression output is clamped at zero and rounded half-to-even, so the
    /// result is never negative.
    pub fn predict(&self, reading: &SensorReading) -> u32 {
        let features: Array1<f64> = self
            .artifact
            .feature_order
            .iter()
            .map(|feature| reading.resolve(feature))
            .collect();
        let raw = self.coefficients.dot(&features) + self.artifact.intercept;
        raw.max(0.0).round_ties_even() as u32
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::FEATURE_NAMES;

    fn artifact(coefficients: Vec<f64>, intercept: f64) -> ModelArtifact {
        ModelArtifact {
            coefficients,
            intercept,
            feature_order: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn prediction_matches_the_closed_form() {
        let predictor =
            Predictor::from_artifact(artifact(vec![2.0, -1.0, 0.1], 5.0)).unwrap();
        let reading = SensorReading::new(30.0, 40.0, 100.0);
        // 2*30 - 40 + 0.1*100 + 5 = 35
        assert_eq!(predictor.predict(&reading), 35);
    }

    #[test]
    fn negative_regression_output_clamps_to_zero() {
        let predictor =
            Predictor::from_artifact(artifact(vec![-10.0, 0.0, 0.0], 0.0)).unwrap();
        let reading = SensorReading::new(1000.0, 60.0, 50.0);
        assert_eq!(predictor.predict(&reading), 0);
    }

    #[test]
    fn rounding_is_half_to_even() {
        // Raw outputs of exactly 2.5 and 3.5 round to 2 and 4.
        let predictor = Predictor::from_artifact(artifact(vec![1.0, 0.0, 0.0], 0.0)).unwrap();
        assert_eq!(predictor.predict(&SensorReading::new(2.5, 0.0, 0.0)), 2);
        assert_eq!(predictor.predict(&SensorReading::new(3.5, 0.0, 0.0)), 4);
    }

    #[test]
    fn missing_humidity_predicts_like_explicit_default() {
        let predictor =
            Predictor::from_artifact(artifact(vec![1.5, 2.0, 0.25], 10.0)).unwrap();
        let explicit = SensorReading::new(22.0, 60.0, 300.0);
        let missing = SensorReading {
            temperature: Some(22.0),
            humidity: None,
            light: Some(300.0),
        };
        assert_eq!(predictor.predict(&missing), predictor.predict(&explicit));
    }
}
