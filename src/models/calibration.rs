use super::tick::utc_seconds;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Linear mapping between moisture percent and the capacitive sensor's raw code.
///
/// The sensor reads `dry_value` in air and `wet_value` in water, so the raw
/// code falls as moisture rises:
/// `raw = dry - (moisture / 100) * (dry - wet)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    #[serde(default = "default_dry_value")]
    pub dry_value: i32,
    #[serde(default = "default_wet_value")]
    pub wet_value: i32,
    #[serde(with = "utc_seconds", default = "default_last_calibration")]
    pub last_calibration: DateTime<Utc>,
}

fn default_dry_value() -> i32 {
    3200
}

fn default_wet_value() -> i32 {
    1200
}

fn default_last_calibration() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl CalibrationConfig {
    /// Raw sensor code for a moisture percentage, truncated toward zero.
    pub fn raw_value(&self, moisture_percent: f64) -> i32 {
        let span = f64::from(self.dry_value - self.wet_value);
        (f64::from(self.dry_value) - (moisture_percent / 100.0) * span) as i32
    }

    pub fn is_valid(&self) -> bool {
        self.dry_value > self.wet_value
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            dry_value: default_dry_value(),
            wet_value: default_wet_value(),
            last_calibration: default_last_calibration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_known_points() {
        let cal = CalibrationConfig::default();
        assert_eq!(cal.raw_value(50.0), 2200);
        assert_eq!(cal.raw_value(0.0), 3200);
        assert_eq!(cal.raw_value(100.0), 1200);
    }

    #[test]
    fn raw_value_truncates() {
        let cal = CalibrationConfig::default();
        // 3200 - 0.5553 * 2000 = 2089.4
        assert_eq!(cal.raw_value(55.53), 2089);
    }

    #[test]
    fn raw_value_decreases_with_moisture() {
        let cal = CalibrationConfig::default();
        assert!(cal.raw_value(30.0) > cal.raw_value(60.0));
    }

    #[test]
    fn default_calibration_serializes() {
        let json = serde_json::to_value(CalibrationConfig::default()).unwrap();
        assert_eq!(json["dry_value"], 3200);
        assert_eq!(json["wet_value"], 1200);
        assert_eq!(json["last_calibration"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        let cal = CalibrationConfig {
            dry_value: 1000,
            wet_value: 3000,
            ..Default::default()
        };
        assert!(!cal.is_valid());
        assert!(CalibrationConfig::default().is_valid());
    }
}
