pub mod countdown;
pub mod leaderboard;
