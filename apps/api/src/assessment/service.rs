use chrono::{SubsecRound, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::insights::domains::{generate_career_domains, CareerDomain};
use crate::insights::summary::AssessmentSummary;
use crate::llm_client::Generator;
use crate::models::assessment::AssessmentSubmission;
use crate::scoring::Report;
use crate::store::{doc_key, DocumentStore};

pub const USERS: &str = "users";
pub const REPORTS: &str = "reports";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub domains: Vec<CareerDomain>,
    pub insight_x_report: Report,
}

/// Scores a submission, ranks career domains and writes both the user
/// document and the report document.
///
/// A retake replaces `insightXReport` and `careerDomains` wholesale; other
/// fields on the user document are left alone.
pub async fn submit_assessment(
    store: &dyn DocumentStore,
    generator: &dyn Generator,
    user_id: &str,
    submission: AssessmentSubmission,
) -> Result<SubmissionOutcome, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id must not be empty".to_string()));
    }

    let report = submission.score();
    let summary = AssessmentSummary::from_submission(&submission);
    let domains = generate_career_domains(generator, &summary, &report).await;

    let mut assessment = serde_json::to_value(&submission)?;
    if let Value::Object(fields) = &mut assessment {
        fields.insert("updatedAt".to_string(), json!(Utc::now().trunc_subsecs(3)));
    }

    store
        .merge(
            &doc_key(USERS, user_id),
            json!({
                "assessment": assessment,
                "careerDomains": domains,
                "insightXReport": report,
            }),
        )
        .await?;

    store
        .merge(
            &doc_key(REPORTS, user_id),
            json!({
                "userId": user_id,
                "assessmentSummary": {
                    "personality": summary.personality,
                    "interest": summary.interest,
                    "cognitiveAbilities": summary.cognitive_abilities,
                    "cvq": summary.cvq,
                },
                "careerDomains": domains,
                "insightXReport": report,
                "generatedAt": report.generated_at(),
            }),
        )
        .await?;

    info!(
        user_id,
        pic_index = report.composite_index(),
        domains = domains.len(),
        "Assessment scored and saved"
    );

    Ok(SubmissionOutcome {
        domains,
        insight_x_report: report,
    })
}

/// Fetches a document from `collection`, or `NotFound`.
pub async fn fetch_document(
    store: &dyn DocumentStore,
    collection: &str,
    id: &str,
) -> Result<Value, AppError> {
    store
        .get(&doc_key(collection, id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No {collection} document for '{id}'")))
}
