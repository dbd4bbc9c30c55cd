use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{list_lift_types, list_recent_lifts, log_lift};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(log_lift))
        .route("/recent", get(list_recent_lifts))
        .route("/types", get(list_lift_types))
}
