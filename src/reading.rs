use log::warn;

/// Canonical feature column names, in training order.
///
/// The order is fixed here once and flows unchanged through the dataset, the
/// fitted model, and the persisted artifact.
pub const AIR_TEMPERATURE: &str = "Air Temperature (°C)";
pub const AIR_HUMIDITY: &str = "Air Humidity (%)";
pub const LIGHT_INTENSITY: &str = "Light Intensity (lux)";

pub const FEATURE_NAMES: [&str; 3] = [AIR_TEMPERATURE, AIR_HUMIDITY, LIGHT_INTENSITY];

/// Per-field fallback values used when a reading omits a feature.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
pub const DEFAULT_HUMIDITY: f64 = 60.0;
pub const DEFAULT_LIGHT: f64 = 50.0;

/// One sensor snapshot handed to the predictor.
///
/// Fields are optional; a missing field is substituted with its declared
/// default and logged as a warning, never treated as a hard failure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub light: Option<f64>,
}

impl SensorReading {
    /// A fully specified reading.
    pub fn new(temperature: f64, humidity: f64, light: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            light: Some(light),
        }
    }

    /// Returns the supplied value for a feature, if any.
    pub fn value_for(&self, feature: &str) -> Option<f64> {
        match feature {
            AIR_TEMPERATURE => self.temperature,
            AIR_HUMIDITY => self.humidity,
            LIGHT_INTENSITY => self.light,
            _ => None,
        }
    }

    /// Declared default for a feature. Features outside the canonical set
    /// fall back to the light default.
    pub fn default_for(feature: &str) -> f64 {
        match feature {
            AIR_TEMPERATURE => DEFAULT_TEMPERATURE,
            AIR_HUMIDITY => DEFAULT_HUMIDITY,
            _ => DEFAULT_LIGHT,
        }
    }

    /// Resolves a feature to its supplied value, or to the declared default
    /// with a warning when absent.
    pub fn resolve(&self, feature: &str) -> f64 {
        self.value_for(feature).unwrap_or_else(|| {
            let default = Self::default_for(feature);
            warn!("missing feature {feature}, using default value {default}");
            default
        })
    }
}
