//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::assessment::service::{
    fetch_document, submit_assessment, SubmissionOutcome, REPORTS, USERS,
};
use crate::errors::AppError;
use crate::models::assessment::AssessmentSubmission;
use crate::scoring::Report;
use crate::state::AppState;

/// POST /api/v1/assessments/:user_id
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<SubmissionOutcome>, AppError> {
    let outcome = submit_assessment(
        state.store.as_ref(),
        state.generator.as_ref(),
        &user_id,
        submission,
    )
    .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/scoring/report
/// Scores the three scored sections without persisting or calling the model.
pub async fn handle_score_report(Json(submission): Json<AssessmentSubmission>) -> Json<Report> {
    Json(submission.score())
}

/// GET /api/v1/users/:user_id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let document = fetch_document(state.store.as_ref(), USERS, &user_id).await?;
    Ok(Json(document))
}

/// GET /api/v1/reports/:user_id
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let document = fetch_document(state.store.as_ref(), REPORTS, &user_id).await?;
    Ok(Json(document))
}
