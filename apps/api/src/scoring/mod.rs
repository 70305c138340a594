//! Deterministic assessment scoring.
//!
//! Turns raw questionnaire answers into Big Five, RIASEC and cognitive
//! profiles plus the PIC Index. Everything here is pure and synchronous:
//! no I/O, no shared state, and no error path for bad input. Missing or
//! malformed answers degrade to neutral defaults so a partial assessment
//! still yields a complete [`Report`].

use std::collections::BTreeMap;

pub mod cognitive;
pub mod composite;
pub mod likert;
pub mod report;
pub mod tables;

pub use report::{generate_report, Report};
pub use tables::validate_tables;

/// Question id -> raw answer for one assessment section.
pub type RawResponseSet = BTreeMap<String, String>;

/// Normalised 0–100 score for a single profile dimension.
pub type TraitScore = u8;
