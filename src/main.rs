use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use pump_predictor::{
    cli::{self, Command},
    reading::DEFAULT_LIGHT,
    ArtifactStore, Dataset, FsArtifactStore, Predictor, SensorReading,
};

const DEFAULT_DATASET_PATH: &str = "generated_dataset.csv";
const DEFAULT_MODEL_PATH: &str = "water_pump_model.json";

fn main() -> ExitCode {
    env_logger::init();

    let command = match cli::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let dataset_path = env_path("DATASET_PATH", DEFAULT_DATASET_PATH);
    let model_path = env_path("MODEL_PATH", DEFAULT_MODEL_PATH);

    match run(command, &dataset_path, &model_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn env_path(var: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(var).unwrap_or_else(|_| default.to_string()))
}

fn run(command: Command, dataset_path: &Path, model_path: &Path) -> pump_predictor::Result<()> {
    let mut store = FsArtifactStore::new(model_path);
    match command {
        Command::Predict {
            temperature,
            humidity,
            light,
        } => {
            let predictor = Predictor::load_or_train(&mut store, dataset_path)?;
            let reading =
                SensorReading::new(temperature, humidity, light.unwrap_or(DEFAULT_LIGHT));
            println!("{}", predictor.predict(&reading));
        }
        Command::Report => {
            // Report mode always retrains and overwrites the artifact.
            let dataset = Dataset::from_csv(dataset_path)?;
            println!("Loaded dataset with {} records", dataset.len());

            let (artifact, metrics) = pump_predictor::trainer::fit(&dataset);
            store.save(&artifact)?;

            println!("Model performance:");
            println!("Mean Squared Error: {:.2}", metrics.mse);
            println!("R² Score: {:.2}", metrics.r_squared);
            println!("Model coefficients:");
            for (feature, coefficient) in artifact.feature_order.iter().zip(&artifact.coefficients)
            {
                println!("- {feature}: {coefficient:.4}");
            }
            println!("Intercept: {:.4}", artifact.intercept);
            println!("Model trained and saved to {}", model_path.display());
        }
    }
    Ok(())
}
