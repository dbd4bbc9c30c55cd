use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use storage::{dto::leaderboard::LeaderboardResponse, repository::lift::LiftRepository};

use crate::config::ChallengeConfig;
use crate::features::live::{self, EventStream};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Lifters ranked by total weight lifted", body = LeaderboardResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(repo): State<LiftRepository>) -> Response {
    let leaderboard = services::get_leaderboard(&repo).await;

    Json(leaderboard).into_response()
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/stream",
    responses(
        (status = 200, description = "Server-sent events carrying the leaderboard whenever it may have changed", content_type = "text/event-stream", body = LeaderboardResponse)
    ),
    tag = "leaderboard"
)]
pub async fn stream_leaderboard(
    State(repo): State<LiftRepository>,
    State(challenge): State<Arc<ChallengeConfig>>,
) -> EventStream {
    live::on_change(repo, challenge.refresh_interval, |repo| async move {
        services::get_leaderboard(&repo).await
    })
}
