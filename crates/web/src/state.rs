use axum::extract::FromRef;
use std::sync::Arc;
use storage::repository::lift::LiftRepository;

use crate::config::ChallengeConfig;

/// Shared handles injected into every handler.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub lifts: LiftRepository,
    pub challenge: Arc<ChallengeConfig>,
}

impl AppState {
    pub fn new(lifts: LiftRepository, challenge: ChallengeConfig) -> Self {
        Self {
            lifts,
            challenge: Arc::new(challenge),
        }
    }
}
