//! Question-to-trait assignment tables and the cognitive answer key.
//!
//! These are configuration data, not logic. Every group must be non-empty;
//! `validate_tables` checks that at startup.

use std::collections::HashSet;

use thiserror::Error;

/// Likert scale used by the personality and interest sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikertScale {
    pub min: f64,
    pub max: f64,
}

impl LikertScale {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Value substituted for absent or unparsable answers.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl Default for LikertScale {
    fn default() -> Self {
        FIVE_POINT_SCALE
    }
}

pub const FIVE_POINT_SCALE: LikertScale = LikertScale::new(1.0, 5.0);

/// A named group of question ids feeding one profile dimension.
#[derive(Debug, Clone, Copy)]
pub struct TraitGroup {
    pub name: &'static str,
    pub question_ids: &'static [&'static str],
}

// ── Big Five ────────────────────────────────────────────────────────────────

pub const OPENNESS: TraitGroup = TraitGroup {
    name: "openness",
    question_ids: &["p3", "p7", "p11", "p17"],
};
pub const CONSCIENTIOUSNESS: TraitGroup = TraitGroup {
    name: "conscientiousness",
    question_ids: &["p2", "p6", "p8", "p14", "p18"],
};
pub const EXTRAVERSION: TraitGroup = TraitGroup {
    name: "extraversion",
    question_ids: &["p1", "p12", "p15"],
};
pub const AGREEABLENESS: TraitGroup = TraitGroup {
    name: "agreeableness",
    question_ids: &["p5", "p9", "p13"],
};
/// Stored as raw neuroticism; the composite index inverts it.
pub const NEUROTICISM: TraitGroup = TraitGroup {
    name: "neuroticism",
    question_ids: &["p4", "p10", "p16", "p19"],
};

pub const PERSONALITY_GROUPS: [TraitGroup; 5] = [
    OPENNESS,
    CONSCIENTIOUSNESS,
    EXTRAVERSION,
    AGREEABLENESS,
    NEUROTICISM,
];

// ── RIASEC ──────────────────────────────────────────────────────────────────

pub const REALISTIC: TraitGroup = TraitGroup {
    name: "realistic",
    question_ids: &["i3", "i9", "i15", "i19"],
};
pub const INVESTIGATIVE: TraitGroup = TraitGroup {
    name: "investigative",
    question_ids: &["i5", "i11", "i17", "i20"],
};
pub const ARTISTIC: TraitGroup = TraitGroup {
    name: "artistic",
    question_ids: &["i1", "i6", "i12", "i18"],
};
pub const SOCIAL: TraitGroup = TraitGroup {
    name: "social",
    question_ids: &["i2", "i8", "i14"],
};
pub const ENTERPRISING: TraitGroup = TraitGroup {
    name: "enterprising",
    question_ids: &["i4", "i10", "i16"],
};
pub const CONVENTIONAL: TraitGroup = TraitGroup {
    name: "conventional",
    question_ids: &["i7", "i13"],
};

pub const INTEREST_GROUPS: [TraitGroup; 6] = [
    REALISTIC,
    INVESTIGATIVE,
    ARTISTIC,
    SOCIAL,
    ENTERPRISING,
    CONVENTIONAL,
];

// ── Cognitive ───────────────────────────────────────────────────────────────

/// Correct answer per cognitive item. Matching is exact and case-sensitive.
pub const COGNITIVE_ANSWER_KEY: &[(&str, &str)] = &[
    ("c1", "Carrot"),
    ("c2", "32"),
    ("c3", "Swimming"),
    ("c4", "Heptagon"),
    ("c5", "30 km"),
    ("c6", "15"),
    ("c7", "Desk"),
    ("c8", "True"),
    ("c9", "IJ"),
    ("c10", "Color"),
    ("c11", "4 cups"),
    ("c12", "Fearful"),
    ("c13", "4 cakes"),
    ("c14", "R"),
    ("c15", "10"),
    ("c16", "Yes"),
    ("c17", "Sleepy"),
    ("c18", "5"),
    ("c19", "EV"),
    ("c20", "20"),
];

// Ability groups overlap: c2, c5, c11 and c13 count toward both
// problem solving and numerical aptitude.
pub const LOGICAL_REASONING: TraitGroup = TraitGroup {
    name: "logicalReasoning",
    question_ids: &["c1", "c4", "c8", "c9", "c16", "c19"],
};
pub const VERBAL_ABILITY: TraitGroup = TraitGroup {
    name: "verbalAbility",
    question_ids: &["c3", "c7", "c10", "c12", "c17"],
};
pub const PROBLEM_SOLVING: TraitGroup = TraitGroup {
    name: "problemSolving",
    question_ids: &["c2", "c5", "c6", "c11", "c13", "c14"],
};
pub const NUMERICAL_APTITUDE: TraitGroup = TraitGroup {
    name: "numericalAptitude",
    question_ids: &["c2", "c5", "c11", "c13", "c18", "c20"],
};

pub const COGNITIVE_GROUPS: [TraitGroup; 4] = [
    LOGICAL_REASONING,
    VERBAL_ABILITY,
    PROBLEM_SOLVING,
    NUMERICAL_APTITUDE,
];

/// Looks up the correct answer for a cognitive item.
pub fn correct_answer(question_id: &str) -> Option<&'static str> {
    COGNITIVE_ANSWER_KEY
        .iter()
        .find(|(id, _)| *id == question_id)
        .map(|(_, answer)| *answer)
}

#[derive(Debug, Error, PartialEq)]
pub enum ScoringTableError {
    #[error("trait group '{0}' has no question ids")]
    EmptyGroup(&'static str),

    #[error("question '{question_id}' is assigned to both '{first}' and '{second}'")]
    OverlappingGroups {
        question_id: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("cognitive question '{question_id}' in '{group}' has no answer key entry")]
    MissingAnswer {
        question_id: &'static str,
        group: &'static str,
    },

    #[error("invalid Likert scale: min {min} must be below max {max}")]
    InvalidScale { min: f64, max: f64 },
}

/// Checks the configuration tables once at startup.
///
/// Likert groups must be non-empty and disjoint within their section;
/// cognitive groups must be non-empty and fully covered by the answer key.
pub fn validate_tables() -> Result<(), ScoringTableError> {
    if FIVE_POINT_SCALE.min >= FIVE_POINT_SCALE.max {
        return Err(ScoringTableError::InvalidScale {
            min: FIVE_POINT_SCALE.min,
            max: FIVE_POINT_SCALE.max,
        });
    }

    check_disjoint(&PERSONALITY_GROUPS)?;
    check_disjoint(&INTEREST_GROUPS)?;

    for group in &COGNITIVE_GROUPS {
        if group.question_ids.is_empty() {
            return Err(ScoringTableError::EmptyGroup(group.name));
        }
        if let Some(missing) = group
            .question_ids
            .iter()
            .find(|id| correct_answer(id).is_none())
        {
            return Err(ScoringTableError::MissingAnswer {
                question_id: *missing,
                group: group.name,
            });
        }
    }

    Ok(())
}

fn check_disjoint(groups: &[TraitGroup]) -> Result<(), ScoringTableError> {
    let mut seen: Vec<(&'static str, &'static str)> = Vec::new();
    for group in groups {
        if group.question_ids.is_empty() {
            return Err(ScoringTableError::EmptyGroup(group.name));
        }
        let mut local = HashSet::new();
        for id in group.question_ids {
            if !local.insert(*id) {
                return Err(ScoringTableError::OverlappingGroups {
                    question_id: *id,
                    first: group.name,
                    second: group.name,
                });
            }
            if let Some((_, owner)) = seen.iter().find(|(seen_id, _)| seen_id == id) {
                return Err(ScoringTableError::OverlappingGroups {
                    question_id: *id,
                    first: *owner,
                    second: group.name,
                });
            }
        }
        seen.extend(group.question_ids.iter().map(|id| (*id, group.name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_are_valid() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_five_point_midpoint_is_three() {
        assert_eq!(FIVE_POINT_SCALE.midpoint(), 3.0);
        assert_eq!(LikertScale::default(), FIVE_POINT_SCALE);
    }

    #[test]
    fn test_answer_key_covers_twenty_items() {
        assert_eq!(COGNITIVE_ANSWER_KEY.len(), 20);
        assert_eq!(correct_answer("c5"), Some("30 km"));
        assert_eq!(correct_answer("c21"), None);
    }

    #[test]
    fn test_personality_groups_cover_nineteen_items() {
        let total: usize = PERSONALITY_GROUPS
            .iter()
            .map(|g| g.question_ids.len())
            .sum();
        assert_eq!(total, 19);
    }

    #[test]
    fn test_interest_groups_cover_twenty_items() {
        let total: usize = INTEREST_GROUPS.iter().map(|g| g.question_ids.len()).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_overlap_is_detected() {
        const A: TraitGroup = TraitGroup {
            name: "a",
            question_ids: &["x1", "x2"],
        };
        const B: TraitGroup = TraitGroup {
            name: "b",
            question_ids: &["x2"],
        };
        assert_eq!(
            check_disjoint(&[A, B]),
            Err(ScoringTableError::OverlappingGroups {
                question_id: "x2",
                first: "a",
                second: "b",
            })
        );
    }

    #[test]
    fn test_empty_group_is_detected() {
        const EMPTY: TraitGroup = TraitGroup {
            name: "empty",
            question_ids: &[],
        };
        assert_eq!(
            check_disjoint(&[EMPTY]),
            Err(ScoringTableError::EmptyGroup("empty"))
        );
    }
}
