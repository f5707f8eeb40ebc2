use crate::error::{Result, SoilSimError};
use crate::logic::simulation::INITIAL_MOISTURE;
use crate::models::{CalibrationConfig, MAX_MOISTURE, MIN_MOISTURE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "yearly-data-final.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device_id")]
    pub device_id: String,
    #[serde(default = "default_sensor_type")]
    pub sensor_type: String,
}

fn default_device_id() -> String {
    "ESP32-S3-001".into()
}

fn default_sensor_type() -> String {
    "capacitive_soil_moisture".into()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_id: default_device_id(),
            sensor_type: default_sensor_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_initial_moisture")]
    pub initial_moisture: f64,
    /// Fixed jitter seed; unset means a fresh random run each time
    #[serde(default)]
    pub seed: Option<u64>,
    /// Set to false to zero every jitter term
    #[serde(default = "default_jitter")]
    pub jitter: bool,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_year() -> i32 {
    2024
}

fn default_initial_moisture() -> f64 {
    INITIAL_MOISTURE
}

fn default_jitter() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            initial_moisture: default_initial_moisture(),
            seed: None,
            jitter: default_jitter(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load configuration from the override path or the standard locations.
    /// Falls back to built-in defaults when no file is found.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(SoilSimError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_path(),
        };

        let Some(config_path) = config_path else {
            tracing::info!("No config file found, using defaults");
            return Ok(Self::default());
        };

        tracing::info!("Loading config from {}", config_path.display());
        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SoilSimError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SoilSimError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.calibration.is_valid() {
            return Err(SoilSimError::Config(format!(
                "calibration dry_value ({}) must be greater than wet_value ({})",
                self.calibration.dry_value, self.calibration.wet_value
            )));
        }

        let moisture = self.simulation.initial_moisture;
        if !(MIN_MOISTURE..=MAX_MOISTURE).contains(&moisture) {
            return Err(SoilSimError::Config(format!(
                "initial_moisture {} is outside {}..={}",
                moisture, MIN_MOISTURE, MAX_MOISTURE
            )));
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("soilsim").join("config.yaml"))
            .filter(|p| p.exists())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
