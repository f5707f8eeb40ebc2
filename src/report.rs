use crate::logic::seasonal::base_decay_rate;
use crate::logic::MonthProgress;
use crate::models::{MonthlySummary, Season};
use std::fmt::Write;
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn season_of(month: u32) -> Option<Season> {
    Season::from_month(month)
}

fn season_symbol(month: u32) -> &'static str {
    season_of(month).map(|s| s.symbol()).unwrap_or("?")
}

/// Format an integer with comma thousands separators
pub fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn banner() -> String {
    format!(
        "🌱 Seasonal soil-moisture demo data generator\n{}",
        "=".repeat(RULE_WIDTH)
    )
}

/// What each month is expected to do, printed before generation.
pub fn monthly_plan() -> String {
    let mut out = String::from("🌱 Generating seasonal demo data...\n📊 Monthly settings:\n");
    for month in 1..=12 {
        if let Some(season) = season_of(month) {
            let _ = writeln!(
                out,
                "  {:2}: {} {}: {} ({:.1}) → {}",
                month,
                season.symbol(),
                season,
                season.drying_speed(),
                base_decay_rate(month),
                season.expected_outcome()
            );
        }
    }
    out
}

pub fn progress_line(progress: &MonthProgress) -> String {
    format!(
        "  {:2} actual: {:5.1}% → {:5.1}% (change {:+5.1}%)",
        progress.month,
        progress.start,
        progress.end,
        progress.net_change()
    )
}

pub fn completion(tick_count: usize, year: i32, output: &Path) -> String {
    format!(
        "\n✅ Seasonal demo data generated!\n📊 Total records: {}\n📅 Period: {}-01-01 to {}-12-31\n💾 File: {}",
        with_thousands(tick_count),
        year,
        year,
        output.display()
    )
}

pub fn month_analysis(summary: &MonthlySummary) -> String {
    format!(
        "{} {:2}: {:5.1}% → {:5.1}% (change {:+5.1}%)\n      watering {:+4.1}% | decay {:4.1}% | {} {}\n",
        season_symbol(summary.month),
        summary.month,
        summary.first_value,
        summary.last_value,
        summary.net_change,
        summary.avg_watering_effect,
        summary.avg_decay_amount,
        summary.trend.symbol(),
        summary.trend
    )
}

pub fn analysis(summaries: &[MonthlySummary]) -> String {
    let mut out = String::from("\n📊 Seasonal trend check:\n\n");
    for summary in summaries {
        let _ = writeln!(out, "{}", month_analysis(summary));
    }
    out
}

pub fn checklist() -> String {
    [
        "🎯 Things to verify:",
        "  1. Winter (1, 2, 12): rising (slow decay)",
        "  2. Rainy season (6): strong rise (very slow decay)",
        "  3. Summer (7, 8): declining (very fast decay)",
        "  4. Other months: stable to slight drift",
    ]
    .join("\n")
}
