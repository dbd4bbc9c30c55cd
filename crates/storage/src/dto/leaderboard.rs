use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One lifter's position on the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_weight: Decimal,
    pub lifts_count: usize,
}

/// Headline figures shown above the leaderboard table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardSummary {
    pub top_lifter: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub highest_weight: Decimal,
    pub total_lifters: usize,
    /// The first three entries
    pub podium: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    /// Absent while nobody has logged a lift
    pub summary: Option<LeaderboardSummary>,
}
