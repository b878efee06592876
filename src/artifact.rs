use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};
use crate::reading::FEATURE_NAMES;

/// The persisted fitted state: coefficients, intercept, and the feature
/// order they were trained against. Overwritten wholesale on retrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub feature_order: Vec<String>,
}

impl ModelArtifact {
    /// Checks the invariants a loaded artifact must uphold before it may be
    /// used for scoring.
    ///
    /// # Errors
    /// - `FeatureOrderMismatch` if the feature order is not the canonical
    ///   triple.
    /// - `CoefficientCountMismatch` if the coefficient count disagrees with
    ///   the feature order.
    pub fn validate(&self) -> Result<()> {
        if self.feature_order != FEATURE_NAMES {
            return Err(PredictorError::FeatureOrderMismatch {
                got: self.feature_order.clone(),
            });
        }
        if self.coefficients.len() != self.feature_order.len() {
            return Err(PredictorError::CoefficientCountMismatch {
                got: self.coefficients.len(),
                expected: self.feature_order.len(),
            });
        }
        Ok(())
    }
}

/// Where artifacts live between invocations.
///
/// The store is injected rather than hardcoded as a path constant so tests
/// and embedding applications can substitute their own backing.
pub trait ArtifactStore {
    /// Returns the stored artifact, or `None` if nothing is stored yet.
    fn load(&mut self) -> Result<Option<ModelArtifact>>;

    /// Stores an artifact, replacing any previous one.
    fn save(&mut self, artifact: &ModelArtifact) -> Result<()>;
}

/// Filesystem-backed store, one JSON document per path.
///
/// JSON keeps `f64` values exact across a save/load round trip, so the
/// persisted model always scores identically to the in-memory one.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    path: PathBuf,
}

impl FsArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactStore for FsArtifactStore {
    fn load(&mut self) -> Result<Option<ModelArtifact>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PredictorError::ArtifactIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let artifact =
            serde_json::from_slice(&bytes).map_err(|source| PredictorError::ArtifactFormat {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(artifact))
    }

    fn save(&mut self, artifact: &ModelArtifact) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(artifact).map_err(|source| PredictorError::ArtifactFormat {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, json).map_err(|source| PredictorError::ArtifactIo {
            path: self.path.clone(),
            source,
        })?;
        info!("saved model artifact to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and embedded callers.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    slot: Option<ModelArtifact>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn load(&mut self) -> Result<Option<ModelArtifact>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, artifact: &ModelArtifact) -> Result<()> {
        self.slot = Some(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;

    fn canonical_artifact() -> ModelArtifact {
        ModelArtifact {
            coefficients: vec![6.0, 0.0, 0.0],
            intercept: 0.0,
            feature_order: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn canonical_artifact_validates() {
        assert!(canonical_artifact().validate().is_ok());
    }

    #[test]
    fn reordered_features_are_rejected() {
        let mut artifact = canonical_artifact();
        artifact.feature_order.swap(0, 2);
        assert!(matches!(
            artifact.validate(),
            Err(PredictorError::FeatureOrderMismatch { .. })
        ));
    }

    #[test]
    fn coefficient_count_must_match_feature_count() {
        let mut artifact = canonical_artifact();
        artifact.coefficients.pop();
        assert!(matches!(
            artifact.validate(),
            Err(PredictorError::CoefficientCountMismatch { got: 2, expected: 3 })
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryArtifactStore::new();
        assert!(store.load().unwrap().is_none());

        let artifact = canonical_artifact();
        store.save(&artifact).unwrap();
        assert_eq!(store.load().unwrap(), Some(artifact));
    }
}
