use chrono::{DateTime, Utc};
use storage::{
    dto::dashboard::{ChallengeInfo, DashboardResponse},
    repository::lift::LiftRepository,
    services::{countdown::TimeRemaining, leaderboard},
};

use crate::config::ChallengeConfig;

pub fn challenge_info(challenge: &ChallengeConfig, now: DateTime<Utc>) -> ChallengeInfo {
    ChallengeInfo {
        name: challenge.name.clone(),
        starts_at: challenge.starts_at,
        started: now >= challenge.starts_at,
    }
}

pub fn countdown(challenge: &ChallengeConfig, now: DateTime<Utc>) -> TimeRemaining {
    TimeRemaining::until(challenge.starts_at, now)
}

/// Countdown plus the statistics derived from every stored lift
pub async fn get_dashboard(
    repo: &LiftRepository,
    challenge: &ChallengeConfig,
    lifter: Option<&str>,
    now: DateTime<Utc>,
) -> DashboardResponse {
    let lifts = repo.load_all().await;

    DashboardResponse {
        challenge: challenge_info(challenge, now),
        countdown: countdown(challenge, now),
        stats: leaderboard::summarize(&lifts, lifter),
    }
}
