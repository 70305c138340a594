//! Parent micro-survey: stores a parent's answers against a student.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::RawResponseSet;
use crate::state::AppState;
use crate::store::{doc_key, DocumentStore};

pub const PARENT_ANSWERS: &str = "parentAnswers";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentQuizSubmission {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub answers: RawResponseSet,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentQuizReceipt {
    pub submission_id: Uuid,
    pub message: String,
}

/// Saves one set of parent answers as its own document.
pub async fn save_parent_answers(
    store: &dyn DocumentStore,
    submission: ParentQuizSubmission,
) -> Result<ParentQuizReceipt, AppError> {
    let student_id = submission.student_id.trim();
    if student_id.is_empty() {
        return Err(AppError::Validation("studentId is required".to_string()));
    }
    if submission.answers.is_empty() {
        return Err(AppError::Validation(
            "answers must contain at least one response".to_string(),
        ));
    }

    let submission_id = Uuid::new_v4();
    store
        .put(
            &doc_key(PARENT_ANSWERS, &submission_id.to_string()),
            json!({
                "studentId": student_id,
                "answers": submission.answers,
                "submittedAt": Utc::now(),
            }),
        )
        .await?;

    info!(student_id, %submission_id, "Parent quiz answers saved");

    Ok(ParentQuizReceipt {
        submission_id,
        message: "Answers saved successfully.".to_string(),
    })
}

/// POST /api/v1/parent-quiz
pub async fn handle_parent_quiz(
    State(state): State<AppState>,
    Json(submission): Json<ParentQuizSubmission>,
) -> Result<(StatusCode, Json<ParentQuizReceipt>), AppError> {
    let receipt = save_parent_answers(state.store.as_ref(), submission).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn submission(student_id: &str, answers: &[(&str, &str)]) -> ParentQuizSubmission {
        ParentQuizSubmission {
            student_id: student_id.to_string(),
            answers: answers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_answers_are_stored_under_new_id() {
        let store = InMemoryStore::new();
        let receipt = save_parent_answers(
            &store,
            submission("stu-1", &[("pq1", "Very involved"), ("pq4", "Fully")]),
        )
        .await
        .unwrap();

        let key = doc_key(PARENT_ANSWERS, &receipt.submission_id.to_string());
        let doc = store.get(&key).await.unwrap().unwrap();
        assert_eq!(doc["studentId"], "stu-1");
        assert_eq!(doc["answers"]["pq4"], "Fully");
        assert!(doc["submittedAt"].is_string());
    }

    #[tokio::test]
    async fn test_two_submissions_do_not_overwrite() {
        let store = InMemoryStore::new();
        let a = save_parent_answers(&store, submission("stu-1", &[("pq1", "A")]))
            .await
            .unwrap();
        let b = save_parent_answers(&store, submission("stu-1", &[("pq1", "B")]))
            .await
            .unwrap();
        assert_ne!(a.submission_id, b.submission_id);
    }

    #[tokio::test]
    async fn test_missing_student_id_is_rejected() {
        let store = InMemoryStore::new();
        let err = save_parent_answers(&store, submission(" ", &[("pq1", "A")]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_answers_are_rejected() {
        let store = InMemoryStore::new();
        let err = save_parent_answers(&store, submission("stu-1", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
