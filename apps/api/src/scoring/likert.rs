use serde::{Deserialize, Serialize};

use super::tables::{
    LikertScale, TraitGroup, AGREEABLENESS, ARTISTIC, CONSCIENTIOUSNESS, CONVENTIONAL,
    ENTERPRISING, EXTRAVERSION, FIVE_POINT_SCALE, INVESTIGATIVE, NEUROTICISM, OPENNESS,
    REALISTIC, SOCIAL,
};
use super::{RawResponseSet, TraitScore};

/// Big Five personality profile, each trait on 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub openness: TraitScore,
    pub conscientiousness: TraitScore,
    pub extraversion: TraitScore,
    pub agreeableness: TraitScore,
    pub neuroticism: TraitScore,
}

/// Holland (RIASEC) interest profile, each dimension on 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestProfile {
    pub realistic: TraitScore,
    pub investigative: TraitScore,
    pub artistic: TraitScore,
    pub social: TraitScore,
    pub enterprising: TraitScore,
    pub conventional: TraitScore,
}

impl InterestProfile {
    pub fn values(&self) -> [TraitScore; 6] {
        [
            self.realistic,
            self.investigative,
            self.artistic,
            self.social,
            self.enterprising,
            self.conventional,
        ]
    }
}

/// Averages the answers for `question_ids` and rescales the mean onto 0–100.
///
/// Each answer contributes its leading integer ("4.5" and "4 - Agree" both
/// read as 4). Absent answers, or answers with no leading digits, count as the
/// scale midpoint, so an incomplete submission still yields a score. With a
/// 1–5 scale, 1 maps to 0, 3 to 50 and 5 to 100.
pub fn compute_trait_score(
    question_ids: &[&str],
    responses: &RawResponseSet,
    scale: LikertScale,
) -> TraitScore {
    let midpoint = scale.midpoint();
    let span = scale.max - scale.min;
    if question_ids.is_empty() || span <= 0.0 {
        return normalize(midpoint, scale.min, span.max(f64::EPSILON));
    }

    let total: f64 = question_ids
        .iter()
        .map(|id| {
            responses
                .get(*id)
                .and_then(|raw| parse_answer(raw))
                .unwrap_or(midpoint)
        })
        .sum();
    let mean = total / question_ids.len() as f64;

    normalize(mean, scale.min, span)
}

pub fn compute_personality_profile(responses: &RawResponseSet) -> PersonalityProfile {
    let score =
        |group: TraitGroup| compute_trait_score(group.question_ids, responses, FIVE_POINT_SCALE);
    PersonalityProfile {
        openness: score(OPENNESS),
        conscientiousness: score(CONSCIENTIOUSNESS),
        extraversion: score(EXTRAVERSION),
        agreeableness: score(AGREEABLENESS),
        neuroticism: score(NEUROTICISM),
    }
}

pub fn compute_interest_profile(responses: &RawResponseSet) -> InterestProfile {
    let score =
        |group: TraitGroup| compute_trait_score(group.question_ids, responses, FIVE_POINT_SCALE);
    InterestProfile {
        realistic: score(REALISTIC),
        investigative: score(INVESTIGATIVE),
        artistic: score(ARTISTIC),
        social: score(SOCIAL),
        enterprising: score(ENTERPRISING),
        conventional: score(CONVENTIONAL),
    }
}

/// Reads an optional sign and a run of digits from the start of `raw`.
/// Anything after the digits is ignored.
fn parse_answer(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end]
        .parse::<f64>()
        .ok()
        .map(|v| sign * v)
        .filter(|v| v.is_finite())
}

fn normalize(mean: f64, min: f64, span: f64) -> TraitScore {
    (((mean - min) / span) * 100.0).round().clamp(0.0, 100.0) as TraitScore
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::{INTEREST_GROUPS, PERSONALITY_GROUPS};

    fn uniform(groups: &[TraitGroup], answer: &str) -> RawResponseSet {
        groups
            .iter()
            .flat_map(|g| g.question_ids.iter())
            .map(|id| (id.to_string(), answer.to_string()))
            .collect()
    }

    fn responses(pairs: &[(&str, &str)]) -> RawResponseSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_midpoint_answers_score_fifty() {
        let r = responses(&[("q1", "3"), ("q2", "3")]);
        assert_eq!(compute_trait_score(&["q1", "q2"], &r, FIVE_POINT_SCALE), 50);
    }

    #[test]
    fn test_scale_extremes_map_to_zero_and_hundred() {
        let low = responses(&[("q1", "1"), ("q2", "1")]);
        let high = responses(&[("q1", "5"), ("q2", "5")]);
        assert_eq!(compute_trait_score(&["q1", "q2"], &low, FIVE_POINT_SCALE), 0);
        assert_eq!(compute_trait_score(&["q1", "q2"], &high, FIVE_POINT_SCALE), 100);
    }

    #[test]
    fn test_missing_answers_default_to_midpoint() {
        // (5 + 3) / 2 = 4 -> 75
        let r = responses(&[("q1", "5")]);
        assert_eq!(compute_trait_score(&["q1", "q2"], &r, FIVE_POINT_SCALE), 75);
        assert_eq!(
            compute_trait_score(&["q1", "q2"], &RawResponseSet::new(), FIVE_POINT_SCALE),
            50
        );
    }

    #[test]
    fn test_malformed_answers_default_to_midpoint() {
        let r = responses(&[("q1", "strongly agree"), ("q2", ""), ("q3", "NaN")]);
        assert_eq!(
            compute_trait_score(&["q1", "q2", "q3"], &r, FIVE_POINT_SCALE),
            50
        );
    }

    #[test]
    fn test_only_the_leading_integer_counts() {
        let r = responses(&[("q1", "4.5")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 75);
        let r = responses(&[("q1", "4 - Agree")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 75);
        let r = responses(&[("q1", "+2")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 25);
    }

    #[test]
    fn test_answers_without_leading_digits_default_to_midpoint() {
        let r = responses(&[("q1", "abc")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 50);
        let r = responses(&[("q1", ".5"), ("q2", "-"), ("q3", "Agree 5")]);
        assert_eq!(
            compute_trait_score(&["q1", "q2", "q3"], &r, FIVE_POINT_SCALE),
            50
        );
    }

    #[test]
    fn test_whitespace_around_numbers_is_tolerated() {
        let r = responses(&[("q1", " 5 ")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 100);
    }

    #[test]
    fn test_mean_is_rounded() {
        // mean of 1, 2 = 1.5 -> 12.5 -> 13
        let r = responses(&[("q1", "1"), ("q2", "2")]);
        assert_eq!(compute_trait_score(&["q1", "q2"], &r, FIVE_POINT_SCALE), 13);
        // mean of 4, 4, 5 = 4.333.. -> 83.33 -> 83
        let r = responses(&[("q1", "4"), ("q2", "4"), ("q3", "5")]);
        assert_eq!(
            compute_trait_score(&["q1", "q2", "q3"], &r, FIVE_POINT_SCALE),
            83
        );
    }

    #[test]
    fn test_out_of_scale_answers_are_clamped() {
        let r = responses(&[("q1", "9")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 100);
        let r = responses(&[("q1", "-4")]);
        assert_eq!(compute_trait_score(&["q1"], &r, FIVE_POINT_SCALE), 0);
    }

    #[test]
    fn test_custom_scale() {
        let seven = LikertScale::new(1.0, 7.0);
        let r = responses(&[("q1", "4")]);
        assert_eq!(compute_trait_score(&["q1"], &r, seven), 50);
        assert_eq!(compute_trait_score(&["q1"], &RawResponseSet::new(), seven), 50);
    }

    #[test]
    fn test_empty_group_scores_midpoint() {
        let r = responses(&[("q1", "5")]);
        assert_eq!(compute_trait_score(&[], &r, FIVE_POINT_SCALE), 50);
    }

    #[test]
    fn test_personality_profile_uses_trait_groups() {
        let mut r = uniform(&PERSONALITY_GROUPS, "3");
        for id in OPENNESS.question_ids {
            r.insert(id.to_string(), "5".to_string());
        }
        for id in NEUROTICISM.question_ids {
            r.insert(id.to_string(), "1".to_string());
        }
        let profile = compute_personality_profile(&r);
        assert_eq!(profile.openness, 100);
        assert_eq!(profile.neuroticism, 0);
        assert_eq!(profile.conscientiousness, 50);
        assert_eq!(profile.extraversion, 50);
        assert_eq!(profile.agreeableness, 50);
    }

    #[test]
    fn test_interest_profile_all_max() {
        let profile = compute_interest_profile(&uniform(&INTEREST_GROUPS, "5"));
        assert!(profile.values().iter().all(|v| *v == 100));
    }

    #[test]
    fn test_interest_profile_ignores_personality_keys() {
        let profile = compute_interest_profile(&uniform(&PERSONALITY_GROUPS, "5"));
        assert!(profile.values().iter().all(|v| *v == 50));
    }

    #[test]
    fn test_partial_personality_responses_still_complete() {
        let r = responses(&[("p3", "5"), ("p2", "1"), ("p1", "4")]);
        let profile = compute_personality_profile(&r);
        // openness: (5+3+3+3)/4 = 3.5 -> 62.5 -> 63
        assert_eq!(profile.openness, 63);
        // conscientiousness: (1+3+3+3+3)/5 = 2.6 -> 40
        assert_eq!(profile.conscientiousness, 40);
        // extraversion: (4+3+3)/3 = 3.333 -> 58
        assert_eq!(profile.extraversion, 58);
        assert_eq!(profile.agreeableness, 50);
        assert_eq!(profile.neuroticism, 50);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = compute_interest_profile(&RawResponseSet::new());
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["investigative"], 50);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
