pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::parent_quiz::handle_parent_quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessments/:user_id",
            post(handlers::handle_submit_assessment),
        )
        .route("/api/v1/scoring/report", post(handlers::handle_score_report))
        .route("/api/v1/users/:user_id", get(handlers::handle_get_user))
        .route("/api/v1/reports/:user_id", get(handlers::handle_get_report))
        // Parent quiz
        .route("/api/v1/parent-quiz", post(handle_parent_quiz))
        .with_state(state)
}
