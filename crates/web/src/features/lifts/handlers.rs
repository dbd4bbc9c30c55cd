use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::lift::{LiftResponse, LogLiftRequest, RecentLiftsQuery},
    models::LiftType,
    repository::lift::LiftRepository,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/lifts",
    request_body = LogLiftRequest,
    responses(
        (status = 201, description = "Lift logged successfully", body = LiftResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "lifts"
)]
pub async fn log_lift(
    State(repo): State<LiftRepository>,
    payload: Result<Json<LogLiftRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let record = services::log_lift(&repo, req).await?;

    Ok((StatusCode::CREATED, Json(LiftResponse::from(record))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/lifts/recent",
    params(RecentLiftsQuery),
    responses(
        (status = 200, description = "Most recent lifts, newest first", body = Vec<LiftResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "lifts"
)]
pub async fn list_recent_lifts(
    State(repo): State<LiftRepository>,
    query: Result<Query<RecentLiftsQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    query.validate().map_err(WebError::BadRequest)?;

    let lifts = services::recent_lifts(&repo, query.limit).await;

    let response: Vec<LiftResponse> = lifts.into_iter().map(LiftResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/lifts/types",
    responses(
        (status = 200, description = "Lift types accepted by the log form", body = Vec<LiftType>)
    ),
    tag = "lifts"
)]
pub async fn list_lift_types() -> Json<Vec<LiftType>> {
    Json(LiftType::ALL.to_vec())
}
