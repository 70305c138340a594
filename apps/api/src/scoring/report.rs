use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::cognitive::{compute_cognitive_profile, CognitiveProfile};
use super::composite::compute_composite_index;
use super::likert::{
    compute_interest_profile, compute_personality_profile, InterestProfile, PersonalityProfile,
};
use super::{RawResponseSet, TraitScore};

/// InsightX report: the scored snapshot of one completed assessment.
///
/// Built once per submission and replaced wholesale on retake. Fields are
/// read-only; `generated_at` never changes after construction and is kept at
/// millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    personality_profile: PersonalityProfile,
    interest_profile: InterestProfile,
    cognitive_profile: CognitiveProfile,
    #[serde(rename = "picIndex")]
    composite_index: TraitScore,
    generated_at: DateTime<Utc>,
}

impl Report {
    pub fn personality_profile(&self) -> &PersonalityProfile {
        &self.personality_profile
    }

    pub fn interest_profile(&self) -> &InterestProfile {
        &self.interest_profile
    }

    pub fn cognitive_profile(&self) -> &CognitiveProfile {
        &self.cognitive_profile
    }

    pub fn composite_index(&self) -> TraitScore {
        self.composite_index
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// Scores all three sections and stamps the report with the current time.
pub fn generate_report(
    personality: &RawResponseSet,
    interest: &RawResponseSet,
    cognitive: &RawResponseSet,
) -> Report {
    generate_report_at(personality, interest, cognitive, Utc::now())
}

/// Same as [`generate_report`] with an injected timestamp, truncated to
/// milliseconds.
pub fn generate_report_at(
    personality: &RawResponseSet,
    interest: &RawResponseSet,
    cognitive: &RawResponseSet,
    generated_at: DateTime<Utc>,
) -> Report {
    let personality_profile = compute_personality_profile(personality);
    let interest_profile = compute_interest_profile(interest);
    let cognitive_profile = compute_cognitive_profile(cognitive);
    let composite_index =
        compute_composite_index(&personality_profile, &interest_profile, &cognitive_profile);

    Report {
        personality_profile,
        interest_profile,
        cognitive_profile,
        composite_index,
        generated_at: generated_at.trunc_subsecs(3),
    }
}
