use super::calibration::CalibrationConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_MOISTURE: f64 = 20.0;
pub const MAX_MOISTURE: f64 = 90.0;

/// One simulated 30-minute sensor sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTick {
    #[serde(with = "utc_seconds")]
    pub timestamp: DateTime<Utc>,
    pub moisture_percent: f64,
    pub raw_value: i32,
    pub is_watering: bool,
}

impl SimulationTick {
    pub fn new(
        timestamp: DateTime<Utc>,
        moisture_percent: f64,
        is_watering: bool,
        calibration: &CalibrationConfig,
    ) -> Self {
        Self {
            timestamp,
            moisture_percent,
            raw_value: calibration.raw_value(moisture_percent),
            is_watering,
        }
    }

    /// "YYYY-MM" prefix used to group ticks by calendar month
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }
}

/// Clamp to the physical sensor range and keep one decimal place.
pub fn settle_moisture(value: f64) -> f64 {
    let clamped = value.clamp(MIN_MOISTURE, MAX_MOISTURE);
    (clamped * 10.0).round() / 10.0
}

/// Serde adapter for `YYYY-MM-DDTHH:MM:SSZ` timestamps.
pub mod utc_seconds {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", value, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn settle_clamps_and_rounds() {
        assert_eq!(settle_moisture(95.3), 90.0);
        assert_eq!(settle_moisture(12.0), 20.0);
        assert_eq!(settle_moisture(67.102), 67.1);
        assert_eq!(settle_moisture(45.06), 45.1);
    }

    #[test]
    fn tick_serializes_with_second_precision_utc() {
        let calibration = CalibrationConfig::default();
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 6, 30, 0).unwrap();
        let tick = SimulationTick::new(ts, 50.0, false, &calibration);

        let json = serde_json::to_value(&tick).unwrap();
        assert_eq!(json["timestamp"], "2024-03-05T06:30:00Z");
        assert_eq!(json["moisture_percent"], 50.0);
        assert_eq!(json["raw_value"], 2200);
        assert_eq!(json["is_watering"], false);

        let parsed: SimulationTick = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tick);
    }

    #[test]
    fn month_key_is_iso_prefix() {
        let calibration = CalibrationConfig::default();
        let ts = Utc.with_ymd_and_hms(2024, 11, 30, 23, 30, 0).unwrap();
        let tick = SimulationTick::new(ts, 70.0, false, &calibration);
        assert_eq!(tick.month_key(), "2024-11");
    }
}
