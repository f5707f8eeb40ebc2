use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    EarlySummer,
    Rainy,
    Summer,
    PeakSummer,
    EarlyAutumn,
    Autumn,
    LateAutumn,
}

impl Season {
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1 | 2 | 12 => Some(Season::Winter),
            3 | 4 => Some(Season::Spring),
            5 => Some(Season::EarlySummer),
            6 => Some(Season::Rainy),
            7 => Some(Season::Summer),
            8 => Some(Season::PeakSummer),
            9 => Some(Season::EarlyAutumn),
            10 => Some(Season::Autumn),
            11 => Some(Season::LateAutumn),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::EarlySummer => "Early summer",
            Season::Rainy => "Rainy season",
            Season::Summer => "Summer",
            Season::PeakSummer => "Peak summer",
            Season::EarlyAutumn => "Early autumn",
            Season::Autumn => "Autumn",
            Season::LateAutumn => "Late autumn",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Season::Winter => "❄️",
            Season::Spring => "🌸",
            Season::EarlySummer => "🌿",
            Season::Rainy => "☔",
            Season::Summer => "🌞",
            Season::PeakSummer => "🔥",
            Season::EarlyAutumn | Season::Autumn => "🍂",
            Season::LateAutumn => "🍁",
        }
    }

    /// How fast the soil dries out in this season, in words
    pub fn drying_speed(&self) -> &'static str {
        match self {
            Season::Winter => "slow drying",
            Season::Spring => "moderate drying",
            Season::EarlySummer => "normal drying",
            Season::Rainy => "very slow drying",
            Season::Summer => "very fast drying",
            Season::PeakSummer => "fastest drying",
            Season::EarlyAutumn => "fast drying",
            Season::Autumn => "fairly fast drying",
            Season::LateAutumn => "normal drying",
        }
    }

    /// Direction the monthly moisture is expected to take
    pub fn expected_outcome(&self) -> &'static str {
        match self {
            Season::Winter => "watering outpaces decay, rising",
            Season::Spring | Season::EarlySummer | Season::LateAutumn => "roughly balanced",
            Season::Rainy => "strong rise",
            Season::Summer | Season::EarlyAutumn => "declining",
            Season::PeakSummer => "strong decline",
            Season::Autumn => "slight decline",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
