use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    ExcessRise,
    Rise,
    Stable,
    Decline,
    ExcessDecline,
}

impl Trend {
    /// Classify a month's net moisture change. Every threshold is strict.
    pub fn from_net_change(net_change: f64) -> Self {
        if net_change > 5.0 {
            Trend::ExcessRise
        } else if net_change > 1.0 {
            Trend::Rise
        } else if net_change > -1.0 {
            Trend::Stable
        } else if net_change > -5.0 {
            Trend::Decline
        } else {
            Trend::ExcessDecline
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::ExcessRise => "excess rise",
            Trend::Rise => "rise",
            Trend::Stable => "stable",
            Trend::Decline => "decline",
            Trend::ExcessDecline => "excess decline",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::ExcessRise | Trend::ExcessDecline => "🔴",
            Trend::Rise => "🟢",
            Trend::Stable => "🟡",
            Trend::Decline => "🟠",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate statistics for one calendar month of ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: u32,
    pub first_value: f64,
    pub last_value: f64,
    pub net_change: f64,
    pub avg_watering_effect: f64,
    pub avg_decay_amount: f64,
    pub trend: Trend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_thresholds() {
        assert_eq!(Trend::from_net_change(6.0), Trend::ExcessRise);
        assert_eq!(Trend::from_net_change(5.0), Trend::Rise);
        assert_eq!(Trend::from_net_change(1.5), Trend::Rise);
        assert_eq!(Trend::from_net_change(1.0), Trend::Stable);
        assert_eq!(Trend::from_net_change(0.0), Trend::Stable);
        assert_eq!(Trend::from_net_change(-0.9), Trend::Stable);
        assert_eq!(Trend::from_net_change(-4.9), Trend::Decline);
        assert_eq!(Trend::from_net_change(-5.0), Trend::ExcessDecline);
        assert_eq!(Trend::from_net_change(-30.0), Trend::ExcessDecline);
    }

    #[test]
    fn minus_one_falls_below_stable() {
        // `> -1` is strict, so exactly -1 is not stable
        assert_eq!(Trend::from_net_change(-1.0), Trend::Decline);
        assert_eq!(Trend::from_net_change(-0.99), Trend::Stable);
    }

    #[test]
    fn trend_display() {
        assert_eq!(Trend::ExcessRise.to_string(), "excess rise");
        assert_eq!(Trend::Stable.as_str(), "stable");
        assert_eq!(Trend::ExcessDecline.as_str(), "excess decline");
    }
}
