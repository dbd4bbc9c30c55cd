use axum::{Router, routing::get};

use crate::state::AppState;

pub mod dashboard;
pub mod leaderboard;
pub mod lifts;
pub mod live;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/challenge", get(dashboard::handlers::get_challenge))
        .nest("/dashboard", dashboard::routes::routes())
        .nest("/lifts", lifts::routes::routes())
        .nest("/leaderboard", leaderboard::routes::routes());

    Router::new().nest("/api", api).with_state(state)
}
