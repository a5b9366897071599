use serde::Serialize;
use tracing::{info, warn};

use crate::extraction::JobRequirement;
use crate::llm_client::prompts::EMAIL_SYSTEM;
use crate::llm_client::TextGenerator;
use crate::scheduling::prompts::{FALLBACK_INVITATION_TEMPLATE, INVITATION_PROMPT_TEMPLATE};
use crate::scheduling::slots::{ProposedSlot, MAX_PRESENTED_SLOTS};
use crate::shortlist::ShortlistEntry;

/// Job title used when the requirement has none.
pub const OPEN_POSITION: &str = "the open position";
const DEFAULT_STRENGTHS: &str = "qualifications, experience";
const STRENGTHS_MENTIONED: usize = 3;
const FALLBACK_SLOTS_LISTED: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewInvitation {
    pub candidate_name: String,
    pub candidate_contact: String,
    pub subject: String,
    pub body: String,
    pub proposed_slots: Vec<ProposedSlot>,
}

/// Drafts an invitation for a shortlisted candidate.
///
/// Always returns an invitation: if the model call fails or comes back empty,
/// the body is the fixed template.
pub async fn draft_invitation(
    llm: &dyn TextGenerator,
    candidate: &ShortlistEntry,
    job: Option<&JobRequirement>,
    company: &str,
    mut slots: Vec<ProposedSlot>,
) -> InterviewInvitation {
    slots.truncate(MAX_PRESENTED_SLOTS);
    let job_title = job.map_or(OPEN_POSITION, |job| job.title_or(OPEN_POSITION));
    let prompt = build_invitation_prompt(candidate, job_title, company, &slots);

    let body = match llm.generate(&prompt, EMAIL_SYSTEM).await {
        Ok(text) => {
            info!("Invitation drafted for {}", candidate.name);
            text.trim().to_string()
        }
        Err(e) => {
            warn!("Invitation drafting failed for {}, using template: {e}", candidate.name);
            fallback_body(&candidate.name, job_title, company, &slots)
        }
    };

    InterviewInvitation {
        candidate_name: candidate.name.clone(),
        candidate_contact: candidate.contact.clone(),
        subject: format!("Interview Invitation: {job_title} position at {company}"),
        body,
        proposed_slots: slots,
    }
}

pub fn build_invitation_prompt(
    candidate: &ShortlistEntry,
    job_title: &str,
    company: &str,
    slots: &[ProposedSlot],
) -> String {
    let strengths = if candidate.strengths.is_empty() {
        DEFAULT_STRENGTHS.to_string()
    } else {
        candidate
            .strengths
            .iter()
            .take(STRENGTHS_MENTIONED)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let slots = slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    INVITATION_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{company}", company)
        .replace("{strengths}", &strengths)
        .replace("{match_percentage}", &candidate.match_percentage.to_string())
        .replace("{slots}", &slots)
        .replace("{candidate_name}", &candidate.name)
}

fn fallback_body(name: &str, job_title: &str, company: &str, slots: &[ProposedSlot]) -> String {
    let slot_lines = slots
        .iter()
        .take(FALLBACK_SLOTS_LISTED)
        .map(|slot| format!("- {slot}"))
        .collect::<Vec<_>>()
        .join("\n");

    FALLBACK_INVITATION_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{company}", company)
        .replace("{slot_lines}", &slot_lines)
        .replace("{candidate_name}", name)
}
