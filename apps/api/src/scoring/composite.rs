//! PIC Index: a fixed-weight blend of personality, interest and cognitive profiles.

use super::cognitive::CognitiveProfile;
use super::likert::{InterestProfile, PersonalityProfile};
use super::TraitScore;

const OPENNESS_WEIGHT: f64 = 0.30;
const CONSCIENTIOUSNESS_WEIGHT: f64 = 0.30;
const EXTRAVERSION_WEIGHT: f64 = 0.20;
const AGREEABLENESS_WEIGHT: f64 = 0.10;
const EMOTIONAL_STABILITY_WEIGHT: f64 = 0.10;

const PEAK_INTEREST_WEIGHT: f64 = 0.6;
const MEAN_INTEREST_WEIGHT: f64 = 0.4;

const PERSONALITY_SHARE: f64 = 0.4;
const INTEREST_SHARE: f64 = 0.3;
const COGNITIVE_SHARE: f64 = 0.3;

/// Personality sub-score. Neuroticism is inverted so stability scores higher.
pub fn personality_score(p: &PersonalityProfile) -> f64 {
    OPENNESS_WEIGHT * f64::from(p.openness)
        + CONSCIENTIOUSNESS_WEIGHT * f64::from(p.conscientiousness)
        + EXTRAVERSION_WEIGHT * f64::from(p.extraversion)
        + AGREEABLENESS_WEIGHT * f64::from(p.agreeableness)
        + EMOTIONAL_STABILITY_WEIGHT * (100.0 - f64::from(p.neuroticism))
}

/// Interest clarity: one strong area outweighs a flat profile.
pub fn interest_score(i: &InterestProfile) -> f64 {
    let values = i.values();
    let peak = values.iter().copied().max().unwrap_or(0);
    PEAK_INTEREST_WEIGHT * f64::from(peak) + MEAN_INTEREST_WEIGHT * mean(&values)
}

pub fn cognitive_score(c: &CognitiveProfile) -> f64 {
    mean(&c.values())
}

pub fn compute_composite_index(
    personality: &PersonalityProfile,
    interest: &InterestProfile,
    cognitive: &CognitiveProfile,
) -> TraitScore {
    let blended = PERSONALITY_SHARE * personality_score(personality)
        + INTEREST_SHARE * interest_score(interest)
        + COGNITIVE_SHARE * cognitive_score(cognitive);
    blended.round().clamp(0.0, 100.0) as TraitScore
}

fn mean(values: &[TraitScore]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}
