//! Job description extraction.

use tracing::{info, warn};

use crate::extraction::fallback::{extract_field, extract_list};
use crate::extraction::normalize::{normalize_response, parse_object};
use crate::extraction::prompts::JD_SUMMARY_PROMPT_TEMPLATE;
use crate::extraction::records::{JobRequirement, NOT_SPECIFIED};
use crate::extraction::ExtractionResult;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmError, TextGenerator};

/// Summarizes a job description into a `JobRequirement`.
///
/// One model call. A failed or empty call yields an error record; anything
/// the model does return is turned into a complete record.
pub async fn summarize_job_description(
    llm: &dyn TextGenerator,
    jd_text: &str,
) -> ExtractionResult<JobRequirement> {
    let prompt = JD_SUMMARY_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);

    match llm.generate(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(raw) => {
            let job = job_from_response(&raw);
            info!("Job description summarized: {}", job.title_or(NOT_SPECIFIED));
            ExtractionResult::Record(job)
        }
        Err(LlmError::EmptyContent) => {
            warn!("Job description summary came back empty");
            ExtractionResult::failed("Failed to get a valid response from the API")
        }
        Err(e) => {
            warn!("Job description summary failed: {e}");
            ExtractionResult::failed(format!("Failed to process the JD: {e}"))
        }
    }
}

/// Turns raw model text into a `JobRequirement`. Never fails.
pub fn job_from_response(raw: &str) -> JobRequirement {
    let text = normalize_response(raw);

    let parse_error = match parse_object(text) {
        Ok(map) => match serde_json::from_value::<JobRequirement>(map.into()) {
            Ok(job) => return job,
            Err(e) => e.to_string(),
        },
        Err(e) => e,
    };

    warn!("JD response is not usable JSON ({parse_error}); falling back to field extraction");
    fallback_job(text)
}

/// Per-field recovery with fixed defaults for every miss.
fn fallback_job(text: &str) -> JobRequirement {
    let scalar = |field: &str, default: &str| {
        Some(extract_field(text, field).unwrap_or_else(|| default.to_string()))
    };
    let list = |field: &str, default: &[&str]| {
        extract_list(text, field)
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    };

    JobRequirement {
        title: scalar("JobTitle", "Data Analyst"),
        department: scalar("Department", NOT_SPECIFIED),
        location: scalar("Location", NOT_SPECIFIED),
        employment_type: scalar("EmploymentType", "Full-time"),
        required_skills: list("RequiredSkills", &["Python", "Data Analysis"]),
        required_experience: scalar("RequiredExperience", "2+ years"),
        required_qualifications: list("RequiredQualifications", &["Bachelor's degree"]),
        responsibilities: list("Responsibilities", &["Data Analysis", "Reporting"]),
        salary_range: scalar("SalaryRange", NOT_SPECIFIED),
        preferred_skills: list("PreferredSkills", &[]),
        extra: Default::default(),
    }
}
