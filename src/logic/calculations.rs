use crate::models::{MonthlySummary, SimulationTick, Trend};
use chrono::Datelike;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Average rise across each watering tick and the tick that follows it
pub fn average_watering_effect(ticks: &[SimulationTick]) -> f64 {
    let effects: Vec<f64> = ticks
        .windows(2)
        .filter(|pair| pair[0].is_watering)
        .map(|pair| pair[1].moisture_percent - pair[0].moisture_percent)
        .collect();

    mean(&effects)
}

/// Average drop between consecutive non-watering ticks.
/// Only actual decreases count; flat or rising steps are skipped.
pub fn average_decay_amount(ticks: &[SimulationTick]) -> f64 {
    let decays: Vec<f64> = ticks
        .windows(2)
        .filter(|pair| !pair[0].is_watering && !pair[1].is_watering)
        .map(|pair| pair[0].moisture_percent - pair[1].moisture_percent)
        .filter(|decay| *decay > 0.0)
        .collect();

    mean(&decays)
}

/// Summarize the ticks of a single month. Returns `None` for an empty slice.
pub fn summarize_month(month: u32, ticks: &[SimulationTick]) -> Option<MonthlySummary> {
    let first_value = ticks.first()?.moisture_percent;
    let last_value = ticks.last()?.moisture_percent;
    let net_change = last_value - first_value;

    Some(MonthlySummary {
        month,
        first_value,
        last_value,
        net_change,
        avg_watering_effect: average_watering_effect(ticks),
        avg_decay_amount: average_decay_amount(ticks),
        trend: Trend::from_net_change(net_change),
    })
}

/// One summary per calendar month present in the series, in calendar order.
///
/// Ticks are grouped by the `YYYY-MM` prefix of their timestamp, so the
/// series should cover a single year.
pub fn monthly_summaries(ticks: &[SimulationTick]) -> Vec<MonthlySummary> {
    let Some(year) = ticks.first().map(|t| t.timestamp.year()) else {
        return Vec::new();
    };

    (1..=12)
        .filter_map(|month| {
            let key = format!("{}-{:02}", year, month);
            let month_ticks: Vec<SimulationTick> = ticks
                .iter()
                .filter(|t| t.month_key() == key)
                .cloned()
                .collect();
            summarize_month(month, &month_ticks)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalibrationConfig;
    use chrono::{Duration, TimeZone, Utc};

    fn series(month: u32, values: &[(f64, bool)]) -> Vec<SimulationTick> {
        let cal = CalibrationConfig::default();
        let start = Utc.with_ymd_and_hms(2024, month, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, (m, w))| {
                SimulationTick::new(start + Duration::minutes(30 * i as i64), *m, *w, &cal)
            })
            .collect()
    }

    #[test]
    fn watering_effect_uses_following_tick() {
        let ticks = series(
            1,
            &[(50.0, true), (58.0, false), (57.0, true), (61.0, false)],
        );
        // (58 - 50 + 61 - 57) / 2
        assert!((average_watering_effect(&ticks) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn decay_counts_only_drops_between_dry_ticks() {
        let ticks = series(
            1,
            &[
                (60.0, false),
                (59.0, false), // drop of 1.0
                (59.0, false), // flat, skipped
                (59.5, false), // rise, skipped
                (57.5, false), // drop of 2.0
                (70.0, true),  // next tick is watering, pair skipped
            ],
        );
        assert!((average_decay_amount(&ticks) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_sets_average_to_zero() {
        let ticks = series(2, &[(40.0, false)]);
        assert_eq!(average_watering_effect(&ticks), 0.0);
        assert_eq!(average_decay_amount(&ticks), 0.0);
        assert!(summarize_month(2, &[]).is_none());
    }

    #[test]
    fn summary_classifies_net_change() {
        let ticks = series(3, &[(50.0, true), (53.0, false), (56.0, false)]);
        let summary = summarize_month(3, &ticks).unwrap();
        assert_eq!(summary.first_value, 50.0);
        assert_eq!(summary.last_value, 56.0);
        assert!((summary.net_change - 6.0).abs() < 1e-9);
        assert_eq!(summary.trend, Trend::ExcessRise);
    }

    #[test]
    fn groups_by_calendar_month() {
        let mut ticks = series(1, &[(70.0, true), (71.0, false)]);
        ticks.extend(series(2, &[(71.0, true), (60.0, false)]));

        let summaries = monthly_summaries(&ticks);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].month, 1);
        assert_eq!(summaries[0].trend, Trend::Stable);
        assert_eq!(summaries[1].month, 2);
        assert_eq!(summaries[1].trend, Trend::ExcessDecline);
        // Watering effect does not reach across the month boundary
        assert!((summaries[0].avg_watering_effect - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_ticks_no_summaries() {
        assert!(monthly_summaries(&[]).is_empty());
    }
}
