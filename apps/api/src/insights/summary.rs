use serde::{Deserialize, Serialize};
use serde_json::to_string;

use crate::models::assessment::AssessmentSubmission;
use crate::scoring::RawResponseSet;

/// Text summaries of each assessment section, as handed to the model and
/// stored alongside the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub personality: String,
    pub interest: String,
    pub cognitive_abilities: String,
    pub self_reported_skills: String,
    pub cvq: String,
}

impl AssessmentSummary {
    pub fn from_submission(submission: &AssessmentSubmission) -> Self {
        Self {
            personality: format!(
                "Summary of personality responses: {}",
                as_json(&submission.personality)
            ),
            interest: format!(
                "Summary of interest responses: {}",
                as_json(&submission.interest)
            ),
            cognitive_abilities: format!(
                "Summary of cognitive & skills responses: {}. Self-reported skills: {}",
                as_json(&submission.cognitive_abilities),
                as_json(&submission.self_reported_skills)
            ),
            self_reported_skills: format!(
                "Summary of self-reported skills: {}",
                as_json(&submission.self_reported_skills)
            ),
            cvq: format!("Summary of CVQ responses: {}", as_json(&submission.cvq)),
        }
    }
}

fn as_json(responses: &RawResponseSet) -> String {
    // A string map always serializes.
    to_string(responses).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries_embed_sorted_json() {
        let mut submission = AssessmentSubmission::default();
        submission.personality.insert("p2".into(), "4".into());
        submission.personality.insert("p1".into(), "5".into());
        let summary = AssessmentSummary::from_submission(&submission);
        assert_eq!(
            summary.personality,
            r#"Summary of personality responses: {"p1":"5","p2":"4"}"#
        );
        assert_eq!(summary.cvq, "Summary of CVQ responses: {}");
    }

    #[test]
    fn test_cognitive_summary_includes_skills() {
        let mut submission = AssessmentSubmission::default();
        submission
            .self_reported_skills
            .insert("coding".into(), "4".into());
        let summary = AssessmentSummary::from_submission(&submission);
        assert!(summary
            .cognitive_abilities
            .ends_with(r#"Self-reported skills: {"coding":"4"}"#));
    }
}
