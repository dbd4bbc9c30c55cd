use storage::{
    dto::leaderboard::LeaderboardResponse, repository::lift::LiftRepository,
    services::leaderboard,
};

/// Current leaderboard with its summary cards
pub async fn get_leaderboard(repo: &LiftRepository) -> LeaderboardResponse {
    let lifts = repo.load_all().await;
    leaderboard::build_response(&lifts)
}
