use storage::{
    dto::lift::LogLiftRequest, error::Result, models::LiftRecord,
    repository::lift::LiftRepository,
};

/// Record a validated form submission
pub async fn log_lift(repo: &LiftRepository, request: LogLiftRequest) -> Result<LiftRecord> {
    let record = repo.append(LiftRecord::from(request)).await?;

    tracing::info!(
        lift_id = %record.id,
        lifter = %record.name,
        lift_type = %record.lift_type,
        "Lift logged"
    );

    Ok(record)
}

/// Most recent lifts, newest first
pub async fn recent_lifts(repo: &LiftRepository, limit: usize) -> Vec<LiftRecord> {
    repo.recent(limit).await
}
