use super::jitter::JitterSource;

/// Evaporation multiplier per month, January first.
///
/// Winter and the June rainy season dry slowly; July/August dry fastest.
const BASE_DECAY_RATES: [f64; 12] = [0.6, 0.5, 0.8, 0.9, 1.0, 0.4, 1.8, 1.9, 1.4, 1.1, 0.9, 0.7];

/// Watering multiplier per month, January first.
///
/// Already-wet rainy-season soil takes up the least, dry summer soil the most.
const BASE_EFFECTIVENESS: [f64; 12] = [1.0, 1.0, 1.1, 1.2, 1.0, 0.8, 1.3, 1.4, 1.2, 1.1, 1.0, 0.9];

pub const MIN_DECAY_RATE: f64 = 0.2;
pub const MIN_SATURATION_FACTOR: f64 = 0.3;
pub const DAILY_DECAY_JITTER: f64 = 0.1;

const RAINY_MONTH: u32 = 6;
const SUMMER_MONTH: u32 = 7;
const PEAK_SUMMER_MONTH: u32 = 8;

// Months outside 1..=12 are clamped.
fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

pub fn base_decay_rate(month: u32) -> f64 {
    BASE_DECAY_RATES[month_index(month)]
}

pub fn base_effectiveness(month: u32) -> f64 {
    BASE_EFFECTIVENESS[month_index(month)]
}

/// Seasonal evaporation multiplier for one calendar day.
///
/// June follows a fixed three-step rainy-season profile, July ramps up
/// through the month, August peaks on the 15th. Other months draw a small
/// daily wobble around their base rate. The result is never below
/// [`MIN_DECAY_RATE`].
pub fn decay_rate<J: JitterSource + ?Sized>(month: u32, day: u32, jitter: &mut J) -> f64 {
    let base = base_decay_rate(month);
    let day = f64::from(day);

    let rate = match month {
        RAINY_MONTH => {
            if day <= 10.0 {
                0.8
            } else if day <= 20.0 {
                0.3
            } else {
                0.4
            }
        }
        SUMMER_MONTH => base + (day / 31.0) * 0.3,
        PEAK_SUMMER_MONTH => {
            let heat_factor = 1.0 - (day - 15.0).abs() / 15.0;
            base + heat_factor * 0.4
        }
        _ => base + jitter.uniform(-DAILY_DECAY_JITTER, DAILY_DECAY_JITTER),
    };

    rate.max(MIN_DECAY_RATE)
}

/// Watering multiplier for the current month and moisture level.
///
/// Wetter soil absorbs less, down to [`MIN_SATURATION_FACTOR`] of nominal.
pub fn watering_effectiveness(month: u32, moisture_percent: f64) -> f64 {
    let saturation_factor = (1.0 - moisture_percent / 100.0).max(MIN_SATURATION_FACTOR);
    base_effectiveness(month) * saturation_factor
}
