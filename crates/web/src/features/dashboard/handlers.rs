use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use storage::{
    dto::dashboard::{ChallengeInfo, DashboardQuery, DashboardResponse},
    repository::lift::LiftRepository,
    services::countdown::TimeRemaining,
};

use crate::config::ChallengeConfig;
use crate::error::WebError;
use crate::features::live::{self, EventStream};

use super::services;

#[utoipa::path(
    get,
    path = "/api/challenge",
    responses(
        (status = 200, description = "Challenge name and start time", body = ChallengeInfo)
    ),
    tag = "dashboard"
)]
pub async fn get_challenge(State(challenge): State<Arc<ChallengeConfig>>) -> Json<ChallengeInfo> {
    Json(services::challenge_info(&challenge, Utc::now()))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Countdown and lift statistics", body = DashboardResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(repo): State<LiftRepository>,
    State(challenge): State<Arc<ChallengeConfig>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    let dashboard =
        services::get_dashboard(&repo, &challenge, query.name.as_deref(), Utc::now()).await;

    Ok(Json(dashboard).into_response())
}

#[utoipa::path(
    get,
    path = "/api/dashboard/stream",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Server-sent events carrying the dashboard whenever lifts may have changed", content_type = "text/event-stream", body = DashboardResponse)
    ),
    tag = "dashboard"
)]
pub async fn stream_dashboard(
    State(repo): State<LiftRepository>,
    State(challenge): State<Arc<ChallengeConfig>>,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<EventStream, WebError> {
    let Query(query) = query?;
    let refresh = challenge.refresh_interval;

    Ok(live::on_change(repo, refresh, move |repo| {
        let challenge = challenge.clone();
        let lifter = query.name.clone();
        async move {
            services::get_dashboard(&repo, &challenge, lifter.as_deref(), Utc::now()).await
        }
    }))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/countdown",
    responses(
        (status = 200, description = "Time left until the challenge starts", body = TimeRemaining)
    ),
    tag = "dashboard"
)]
pub async fn get_countdown(State(challenge): State<Arc<ChallengeConfig>>) -> Json<TimeRemaining> {
    Json(services::countdown(&challenge, Utc::now()))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/countdown/stream",
    responses(
        (status = 200, description = "Server-sent countdown ticks, ending once the challenge has started", content_type = "text/event-stream", body = TimeRemaining)
    ),
    tag = "dashboard"
)]
pub async fn stream_countdown(State(challenge): State<Arc<ChallengeConfig>>) -> EventStream {
    live::countdown(challenge.starts_at, challenge.countdown_tick)
}
