pub mod dashboard;
pub mod leaderboard;
pub mod lift;
