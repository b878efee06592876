use std::{error::Error, fmt, io, path::PathBuf};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// All errors that can occur while loading data, persisting the model, or
/// preparing a prediction.
#[derive(Debug)]
pub enum PredictorError {
    /// The dataset file does not exist at the given path.
    DatasetNotFound { path: PathBuf },
    /// The dataset file exists but contains no data rows.
    DatasetEmpty { path: PathBuf },
    /// The dataset file could not be read or deserialized.
    Csv { path: PathBuf, source: csv::Error },
    /// Reading or writing the artifact file failed.
    ArtifactIo { path: PathBuf, source: io::Error },
    /// The artifact file exists but is not a valid serialized model.
    ArtifactFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A loaded artifact's feature order differs from the canonical one.
    FeatureOrderMismatch { got: Vec<String> },
    /// A loaded artifact's coefficient count does not match its feature order.
    CoefficientCountMismatch { got: usize, expected: usize },
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetNotFound { path } => {
                write!(f, "dataset not found at {}", path.display())
            }
            Self::DatasetEmpty { path } => {
                write!(f, "dataset at {} has no data rows", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            Self::ArtifactIo { path, source } => {
                write!(f, "artifact io error at {}: {source}", path.display())
            }
            Self::ArtifactFormat { path, source } => {
                write!(f, "malformed artifact at {}: {source}", path.display())
            }
            Self::FeatureOrderMismatch { got } => {
                write!(f, "artifact feature order {got:?} does not match the trained features")
            }
            Self::CoefficientCountMismatch { got, expected } => {
                write!(f, "artifact has {got} coefficients, expected {expected}")
            }
        }
    }
}

impl Error for PredictorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv { source, .. } => Some(source),
            Self::ArtifactIo { source, .. } => Some(source),
            Self::ArtifactFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}
