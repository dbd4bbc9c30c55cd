use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::services::countdown::TimeRemaining;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_lifts: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_weight: Decimal,
    pub total_lifters: usize,
    /// Leaderboard rank of the requested lifter, if they have logged anything
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChallengeInfo {
    pub name: String,
    pub starts_at: DateTime<Utc>,
    pub started: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub challenge: ChallengeInfo,
    pub countdown: TimeRemaining,
    pub stats: DashboardStats,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Lifter whose rank should be reported
    pub name: Option<String>,
}
