use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder for any field the profile page does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub country: String,
    pub image: Option<String>,
    pub role: String,
    pub rankings: Rankings,
    pub batting_stats: BTreeMap<String, BattingStats>,
    pub bowling_stats: BTreeMap<String, BowlingStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub batting: FormatRanks,
    pub bowling: FormatRanks,
}

/// ICC rank per match format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRanks {
    pub test: String,
    pub odi: String,
    pub t20: String,
}

impl Default for FormatRanks {
    fn default() -> Self {
        Self {
            test: NOT_AVAILABLE.to_string(),
            odi: NOT_AVAILABLE.to_string(),
            t20: NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingStats {
    pub matches: String,
    pub runs: String,
    pub highest_score: String,
    pub average: String,
    pub strike_rate: String,
    pub hundreds: String,
    pub fifties: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingStats {
    pub balls: String,
    pub runs: String,
    pub wickets: String,
    pub best_bowling_innings: String,
    pub economy: String,
    pub five_wickets: String,
}

/// `"{date} - {series/match info}"`, in page order.
pub type ScheduleEntry = String;

/// Status text of one in-progress match, in page order.
pub type LiveMatchEntry = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
