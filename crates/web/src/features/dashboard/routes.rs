use axum::{Router, routing::get};

use super::handlers::{get_countdown, get_dashboard, stream_countdown, stream_dashboard};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/stream", get(stream_dashboard))
        .route("/countdown", get(get_countdown))
        .route("/countdown/stream", get(stream_countdown))
}
