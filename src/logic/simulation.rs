use super::jitter::JitterSource;
use super::seasonal::{decay_rate, watering_effectiveness};
use crate::error::{Result, SoilSimError};
use crate::models::{
    settle_moisture, CalibrationConfig, SimulationTick, DATA_INTERVAL_MINUTES,
    WATERING_INTERVAL_HOURS,
};
use chrono::{Datelike, NaiveDate};

pub const INITIAL_MOISTURE: f64 = 70.0;

/// Nominal moisture gain from one watering event (%)
pub const BASE_WATERING_INCREASE: f64 = 12.0;
pub const WATERING_JITTER: f64 = 1.0;

/// Nominal moisture loss per 30-minute tick (%), sped up for the demo
pub const BASE_DECAY_PER_TICK: f64 = 1.2;
pub const DECAY_JITTER: f64 = 0.1;

pub const TICKS_PER_DAY: u32 = 24 * 60 / DATA_INTERVAL_MINUTES;

/// Everything the update function needs to know about one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub month: u32,
    pub is_watering: bool,
    pub daily_decay_rate: f64,
}

/// Watering runs at the top of every third hour.
pub fn is_watering_slot(hour: u32, minute: u32) -> bool {
    hour % WATERING_INTERVAL_HOURS == 0 && minute == 0
}

/// Advance moisture by one tick. The result is clamped and rounded.
pub fn step<J: JitterSource + ?Sized>(moisture: f64, ctx: &TickContext, jitter: &mut J) -> f64 {
    let next = if ctx.is_watering {
        let effectiveness = watering_effectiveness(ctx.month, moisture);
        let increase = BASE_WATERING_INCREASE * effectiveness
            + jitter.uniform(-WATERING_JITTER, WATERING_JITTER);
        moisture + increase
    } else {
        // Wetter soil evaporates faster
        let moisture_factor = 0.7 + (moisture / 100.0) * 0.5;
        let decrease = BASE_DECAY_PER_TICK * ctx.daily_decay_rate * moisture_factor
            + jitter.uniform(-DECAY_JITTER, DECAY_JITTER);
        moisture - decrease
    };

    settle_moisture(next)
}

/// Moisture at the start and end of one simulated month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthProgress {
    pub month: u32,
    pub start: f64,
    pub end: f64,
}

impl MonthProgress {
    pub fn net_change(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulationRun {
    pub ticks: Vec<SimulationTick>,
    pub progress: Vec<MonthProgress>,
}

pub struct Simulator<J: JitterSource> {
    year: i32,
    initial_moisture: f64,
    calibration: CalibrationConfig,
    jitter: J,
}

impl<J: JitterSource> Simulator<J> {
    pub fn new(year: i32, calibration: CalibrationConfig, jitter: J) -> Self {
        Self {
            year,
            initial_moisture: INITIAL_MOISTURE,
            calibration,
            jitter,
        }
    }

    pub fn with_initial_moisture(mut self, moisture: f64) -> Self {
        self.initial_moisture = moisture;
        self
    }

    /// Simulate every half-hour of the year, in calendar order.
    pub fn run(&mut self) -> Result<SimulationRun> {
        let mut run = SimulationRun::default();
        let mut moisture = settle_moisture(self.initial_moisture);

        for month in 1..=12 {
            let first_day = NaiveDate::from_ymd_opt(self.year, month, 1).ok_or_else(|| {
                SoilSimError::InvalidData(format!("invalid date {}-{:02}-01", self.year, month))
            })?;
            let start = moisture;

            for date in first_day.iter_days().take_while(|d| d.month() == month) {
                let daily_decay_rate = decay_rate(month, date.day(), &mut self.jitter);

                for slot in 0..TICKS_PER_DAY {
                    let minutes = slot * DATA_INTERVAL_MINUTES;
                    let (hour, minute) = (minutes / 60, minutes % 60);
                    let timestamp = date
                        .and_hms_opt(hour, minute, 0)
                        .ok_or_else(|| {
                            SoilSimError::InvalidData(format!(
                                "invalid time {} {:02}:{:02}",
                                date, hour, minute
                            ))
                        })?
                        .and_utc();

                    let ctx = TickContext {
                        month,
                        is_watering: is_watering_slot(hour, minute),
                        daily_decay_rate,
                    };
                    moisture = step(moisture, &ctx, &mut self.jitter);

                    run.ticks.push(SimulationTick::new(
                        timestamp,
                        moisture,
                        ctx.is_watering,
                        &self.calibration,
                    ));
                }
            }

            let progress = MonthProgress {
                month,
                start,
                end: moisture,
            };
            tracing::info!(
                month,
                start = progress.start,
                end = progress.end,
                "Simulated month"
            );
            run.progress.push(progress);
        }

        tracing::debug!("Generated {} ticks for {}", run.ticks.len(), self.year);
        Ok(run)
    }
}
