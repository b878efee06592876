use log::info;

use crate::artifact::ModelArtifact;
use crate::dataset::Dataset;
use crate::model::{FitMetrics, LinearModel};
use crate::reading::FEATURE_NAMES;

/// Fits the regression over the whole dataset and packages it as an
/// artifact, alongside training-set diagnostics.
///
/// The fit deliberately uses every record rather than a held-out split: the
/// deployed model should see all available data, and the metrics returned
/// here are for diagnostic printing only.
pub fn fit(dataset: &Dataset) -> (ModelArtifact, FitMetrics) {
    let features = dataset.features();
    let targets = dataset.targets();

    let model = LinearModel::fit(features.view(), targets.view());
    let metrics = FitMetrics::evaluate(&model, features.view(), targets.view());

    info!(
        "trained on {} records (mse {:.4}, r2 {:.4})",
        dataset.len(),
        metrics.mse,
        metrics.r_squared
    );

    let artifact = ModelArtifact {
        coefficients: model.coefficients.to_vec(),
        intercept: model.intercept,
        feature_order: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
    };
    (artifact, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TrainingRecord;

    fn example_dataset() -> Dataset {
        let rows = [
            (20.0, 50.0, 300.0, 120.0),
            (25.0, 60.0, 400.0, 150.0),
            (30.0, 70.0, 500.0, 180.0),
        ];
        Dataset::from_records(
            rows.iter()
                .map(|&(t, h, l, w)| TrainingRecord {
                    air_temperature: t,
                    air_humidity: h,
                    light_intensity: l,
                    water_required: w,
                })
                .collect(),
        )
    }

    #[test]
    fn artifact_carries_canonical_feature_order() {
        let (artifact, _) = fit(&example_dataset());
        assert!(artifact.validate().is_ok());
        assert_eq!(artifact.coefficients.len(), 3);
    }

    #[test]
    fn training_twice_is_bit_identical() {
        let dataset = example_dataset();
        let (a, _) = fit(&dataset);
        let (b, _) = fit(&dataset);
        let bits = |coefs: &[f64]| coefs.iter().map(|c| c.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.coefficients), bits(&b.coefficients));
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    }
}
