//! Career-domain ranking.
//!
//! Asks the generator for the student's top career domains and normalises the
//! answer. This step never fails a submission: any generator or shape error
//! yields an empty list and a warning.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::insights::prompts::{CAREER_DOMAINS_SHAPE, CAREER_DOMAINS_SYSTEM};
use crate::insights::summary::AssessmentSummary;
use crate::llm_client::{Generator, LlmError};
use crate::scoring::Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDomain {
    pub domain_name: String,
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub career_paths: Vec<String>,
    #[serde(default)]
    pub swot_analysis: String,
}

#[derive(Debug, Deserialize)]
struct CareerDomainsOutput {
    #[serde(default)]
    domains: Vec<CareerDomain>,
}

/// Builds the user prompt: section summaries plus the scored profiles.
pub fn build_domains_prompt(summary: &AssessmentSummary, report: &Report) -> String {
    let data = json!({
        "personality": summary.personality,
        "interest": summary.interest,
        "cognitiveAbilities": summary.cognitive_abilities,
        "selfReportedSkills": summary.self_reported_skills,
        "cvq": summary.cvq,
        "insightX": {
            "personalityProfile": report.personality_profile(),
            "interestProfile": report.interest_profile(),
            "cognitiveProfile": report.cognitive_profile(),
            "picIndex": report.composite_index(),
        },
    });
    let data = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());

    format!(
        "Student Assessment Data:\n{data}\n\n{CAREER_DOMAINS_SHAPE}\n\nGenerate the top 5 career domains for this student."
    )
}

/// Ranks career domains, highest score first. Returns an empty list on failure.
pub async fn generate_career_domains(
    generator: &dyn Generator,
    summary: &AssessmentSummary,
    report: &Report,
) -> Vec<CareerDomain> {
    let prompt = build_domains_prompt(summary, report);
    match request_domains(generator, &prompt).await {
        Ok(domains) if domains.is_empty() => {
            warn!("Generator returned no career domains");
            domains
        }
        Ok(domains) => {
            debug!("Generated {} career domains", domains.len());
            domains
        }
        Err(e) => {
            warn!("Career domain generation failed: {e}");
            Vec::new()
        }
    }
}

async fn request_domains(
    generator: &dyn Generator,
    prompt: &str,
) -> Result<Vec<CareerDomain>, LlmError> {
    let value = generator.generate_json(prompt, CAREER_DOMAINS_SYSTEM).await?;
    let output: CareerDomainsOutput = serde_json::from_value(value)?;
    Ok(rank_domains(output.domains))
}

/// Clamps scores into 0–100 and sorts descending. Ties keep model order.
fn rank_domains(mut domains: Vec<CareerDomain>) -> Vec<CareerDomain> {
    for domain in &mut domains {
        domain.score = if domain.score.is_finite() {
            domain.score.clamp(0.0, 100.0)
        } else {
            0.0
        };
    }
    domains.sort_by(|a, b| b.score.total_cmp(&a.score));
    domains
}
