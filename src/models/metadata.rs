use super::calibration::CalibrationConfig;
use super::tick::SimulationTick;
use serde::{Deserialize, Serialize};

pub const WATERING_INTERVAL_HOURS: u32 = 3;
pub const WATERING_DURATION_SECONDS: u32 = 10;
pub const DATA_INTERVAL_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub device_id: String,
    pub sensor_type: String,
    pub watering_interval_hours: u32,
    pub watering_duration_seconds: u32,
    pub data_interval_minutes: u32,
    pub calibration: CalibrationConfig,
    pub demo_parameters: DemoParameters,
}

impl Metadata {
    pub fn new(device_id: &str, sensor_type: &str, calibration: CalibrationConfig) -> Self {
        Self {
            device_id: device_id.to_string(),
            sensor_type: sensor_type.to_string(),
            watering_interval_hours: WATERING_INTERVAL_HOURS,
            watering_duration_seconds: WATERING_DURATION_SECONDS,
            data_interval_minutes: DATA_INTERVAL_MINUTES,
            calibration,
            demo_parameters: DemoParameters::default(),
        }
    }
}

/// Narrative description of the model, for people reading the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoParameters {
    pub base_decay_rate: String,
    pub winter_decay: String,
    pub rainy_decay: String,
    pub summer_decay: String,
    pub watering_effect: String,
    pub expected_trends: ExpectedTrends,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedTrends {
    pub winter: String,
    pub rainy: String,
    pub summer: String,
    pub other: String,
}

impl Default for DemoParameters {
    fn default() -> Self {
        Self {
            base_decay_rate: "1.2%/30min (accelerated for demo)".into(),
            winter_decay: "0.5–0.7× (soil holds moisture)".into(),
            rainy_decay: "0.3–0.4× (rainy season)".into(),
            summer_decay: "1.8–1.9× (heat and dry air)".into(),
            watering_effect: "season and saturation dependent (8–16%)".into(),
            expected_trends: ExpectedTrends {
                winter: "watering > decay → rise".into(),
                rainy: "watering ≫ decay → strong rise".into(),
                summer: "watering < decay → decline".into(),
                other: "watering ≈ decay → stable".into(),
            },
        }
    }
}

/// Top-level document written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: Metadata,
    pub data: Vec<SimulationTick>,
}
