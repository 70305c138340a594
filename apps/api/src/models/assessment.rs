use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::scoring::{generate_report, RawResponseSet, Report};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralInfo {
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub class_of_study: String,
    pub place: String,
    pub school_or_college: String,
}

/// One completed assessment as submitted by the assessment UI.
///
/// Every section is a question id -> answer map. Numeric answers are accepted
/// and stored as their decimal text; nulls and nested values are dropped and
/// therefore scored as unanswered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_info: Option<GeneralInfo>,
    #[serde(default, deserialize_with = "lenient_responses")]
    pub personality: RawResponseSet,
    #[serde(default, deserialize_with = "lenient_responses")]
    pub interest: RawResponseSet,
    #[serde(default, deserialize_with = "lenient_responses")]
    pub cognitive_abilities: RawResponseSet,
    #[serde(default, deserialize_with = "lenient_responses")]
    pub self_reported_skills: RawResponseSet,
    #[serde(default, deserialize_with = "lenient_responses")]
    pub cvq: RawResponseSet,
}

impl AssessmentSubmission {
    /// Runs the scoring engine over the three scored sections.
    pub fn score(&self) -> Report {
        generate_report(&self.personality, &self.interest, &self.cognitive_abilities)
    }
}

fn lenient_responses<'de, D>(deserializer: D) -> Result<RawResponseSet, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Value> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(id, answer)| match answer {
            Value::String(s) => Some((id, s)),
            Value::Number(n) => Some((id, n.to_string())),
            Value::Bool(b) => Some((id, b.to_string())),
            _ => None,
        })
        .collect())
}
