use serde::{Deserialize, Serialize};

use super::tables::{
    correct_answer, LOGICAL_REASONING, NUMERICAL_APTITUDE, PROBLEM_SOLVING, VERBAL_ABILITY,
};
use super::{RawResponseSet, TraitScore};

/// Accuracy per cognitive ability, 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveProfile {
    pub logical_reasoning: TraitScore,
    pub verbal_ability: TraitScore,
    pub problem_solving: TraitScore,
    pub numerical_aptitude: TraitScore,
}

impl CognitiveProfile {
    pub fn values(&self) -> [TraitScore; 4] {
        [
            self.logical_reasoning,
            self.verbal_ability,
            self.problem_solving,
            self.numerical_aptitude,
        ]
    }
}

/// Percentage of `question_ids` answered exactly as the answer key says.
///
/// No normalisation is applied: "desk" does not match "Desk" and
/// " 32" does not match "32". Unanswered items count as incorrect.
pub fn compute_accuracy_score(question_ids: &[&str], responses: &RawResponseSet) -> TraitScore {
    if question_ids.is_empty() {
        return 0;
    }
    let correct = question_ids
        .iter()
        .filter(|id| match (responses.get(**id), correct_answer(id)) {
            (Some(given), Some(expected)) => given == expected,
            _ => false,
        })
        .count();

    ((correct as f64 / question_ids.len() as f64) * 100.0)
        .round()
        .clamp(0.0, 100.0) as TraitScore
}

pub fn compute_cognitive_profile(responses: &RawResponseSet) -> CognitiveProfile {
    CognitiveProfile {
        logical_reasoning: compute_accuracy_score(LOGICAL_REASONING.question_ids, responses),
        verbal_ability: compute_accuracy_score(VERBAL_ABILITY.question_ids, responses),
        problem_solving: compute_accuracy_score(PROBLEM_SOLVING.question_ids, responses),
        numerical_aptitude: compute_accuracy_score(NUMERICAL_APTITUDE.question_ids, responses),
    }
}
