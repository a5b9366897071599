//! Resume assessment against a job requirement.

use serde_json::Value;
use tracing::{info, warn};

use crate::extraction::fallback::{extract_field, extract_list, find_email, guess_candidate_name};
use crate::extraction::normalize::{normalize_response, parse_object};
use crate::extraction::prompts::CV_ANALYSIS_PROMPT_TEMPLATE;
use crate::extraction::records::{
    CandidateAssessment, JobRequirement, Percentage, Recommendation, NOT_SPECIFIED,
};
use crate::extraction::ExtractionResult;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmError, TextGenerator};

pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";
pub const CONTACT_NOT_FOUND: &str = "Not found";
/// Overall match assumed when a response could not be parsed at all.
const FALLBACK_OVERALL_MATCH: i64 = 50;

/// Assesses one resume against the job requirement.
pub async fn assess_candidate(
    llm: &dyn TextGenerator,
    cv_text: &str,
    job: &JobRequirement,
) -> ExtractionResult<CandidateAssessment> {
    let prompt = build_assessment_prompt(cv_text, job);

    match llm.generate(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(raw) => {
            if let Some(reason) = reported_error(&raw) {
                warn!("Model declined the resume: {reason}");
                return ExtractionResult::failed(reason);
            }
            let assessment = assessment_from_response(&raw, cv_text, job);
            info!(
                "Assessed {}: overall match {}",
                assessment.name(),
                assessment.overall_match
            );
            ExtractionResult::Record(assessment)
        }
        Err(LlmError::EmptyContent) => {
            warn!("Resume assessment came back empty");
            ExtractionResult::failed("Failed to get a valid response from the API for CV analysis")
        }
        Err(e) => {
            warn!("Resume assessment failed: {e}");
            ExtractionResult::failed(format!("Failed to analyze CV: {e}"))
        }
    }
}

pub fn build_assessment_prompt(cv_text: &str, job: &JobRequirement) -> String {
    CV_ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_title}", job.title_or(NOT_SPECIFIED))
        .replace("{required_skills}", &job.required_skills.join(", "))
        .replace("{preferred_skills}", &job.preferred_skills.join(", "))
        .replace("{required_experience}", job.required_experience_or(NOT_SPECIFIED))
        .replace("{qualifications}", &job.required_qualifications.join(", "))
        .replace("{responsibilities}", &job.responsibilities.join(", "))
        .replace("{cv_text}", cv_text)
}

/// The `error` a model reports in place of an assessment, if any.
fn reported_error(raw: &str) -> Option<String> {
    let map = parse_object(normalize_response(raw)).ok()?;
    match map.get("error")? {
        Value::String(reason) => Some(reason.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Turns raw model text into a `CandidateAssessment`. Never fails.
///
/// The resume text feeds the name and contact defaults; the job requirement
/// feeds the missing-skills default.
pub fn assessment_from_response(
    raw: &str,
    cv_text: &str,
    job: &JobRequirement,
) -> CandidateAssessment {
    let text = normalize_response(raw);

    let parse_error = match parse_object(text) {
        Ok(map) => match serde_json::from_value::<CandidateAssessment>(map.into()) {
            Ok(assessment) => return assessment,
            Err(e) => e.to_string(),
        },
        Err(e) => e,
    };

    warn!("CV response is not usable JSON ({parse_error}); falling back to field extraction");
    fallback_assessment(text, cv_text, job)
}

fn fallback_assessment(text: &str, cv_text: &str, job: &JobRequirement) -> CandidateAssessment {
    let list = |field: &str, default: &[&str]| {
        extract_list(text, field)
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    };
    let score = |field: &str, default: i64| {
        extract_field(text, field)
            .and_then(|value| Percentage::parse(&value))
            .unwrap_or_else(|| Percentage::new(default))
    };

    let candidate_name = extract_field(text, "CandidateName")
        .or_else(|| guess_candidate_name(cv_text))
        .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());
    let contact_info = extract_field(text, "ContactInfo")
        .or_else(|| find_email(cv_text))
        .unwrap_or_else(|| CONTACT_NOT_FOUND.to_string());

    CandidateAssessment {
        candidate_name: Some(candidate_name),
        contact_info: Some(contact_info),
        skills: list("Skills", &["Unable to parse skills"]),
        experience: list("Experience", &["Experience details not parsed"]),
        education: list("Education", &["Education details not parsed"]),
        certifications: list("Certifications", &[]),
        skill_match: score("SkillMatch", 0),
        experience_match: score("ExperienceMatch", 0),
        qualification_match: score("QualificationMatch", 0),
        overall_match: score("OverallMatch", FALLBACK_OVERALL_MATCH),
        matched_skills: list("MatchedSkills", &[]),
        missing_skills: extract_list(text, "MissingSkills")
            .unwrap_or_else(|| job.required_skills.clone()),
        strengths: list("Strengths", &["Unable to determine strengths"]),
        areas_for_improvement: list(
            "Areas_for_Improvement",
            &["Resume parsing failed, please review manually"],
        ),
        recommendation: extract_field(text, "Recommendation")
            .map(|value| Recommendation::parse(&value))
            .unwrap_or(Recommendation::FurtherReview),
        extra: Default::default(),
    }
}
