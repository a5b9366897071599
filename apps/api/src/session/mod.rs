//! Per-recruiter wizard state and the in-memory store that holds it.

pub mod handlers;
pub mod store;
pub mod wizard;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::extraction::{CandidateAssessment, ExtractionResult, JobRequirement};
use crate::scheduling::InterviewInvitation;
use crate::shortlist::Shortlist;

pub use store::SessionStore;
pub use wizard::{SessionError, WizardStep};

/// Everything one pass through the wizard accumulates.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub step: WizardStep,
    pub jd_text: String,
    pub job: Option<ExtractionResult<JobRequirement>>,
    pub resume_texts: Vec<String>,
    pub assessments: Vec<ExtractionResult<CandidateAssessment>>,
    pub shortlist: Shortlist,
    pub selected_candidate: Option<String>,
    pub invitation: Option<InterviewInvitation>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            step: WizardStep::Import,
            jd_text: String::new(),
            job: None,
            resume_texts: Vec::new(),
            assessments: Vec::new(),
            shortlist: Shortlist::default(),
            selected_candidate: None,
            invitation: None,
        }
    }

    /// The extracted job requirement, if extraction succeeded.
    pub fn job_requirement(&self) -> Option<&JobRequirement> {
        self.job.as_ref().and_then(ExtractionResult::record)
    }

    pub fn require_step(&self, expected: WizardStep) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Moves one step forward once the current step's work is done.
    pub fn advance(&mut self) -> Result<WizardStep, SessionError> {
        let next = self.step.next().ok_or(SessionError::NoNextStep(self.step))?;
        if let Some(reason) = self.unmet_prerequisite() {
            return Err(SessionError::MissingPrerequisite {
                step: self.step,
                reason,
            });
        }
        self.move_to(next);
        Ok(next)
    }

    /// One step back; stays put at the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.move_to(previous);
        }
        self.step
    }

    /// Revisits the current or an earlier step.
    pub fn go_to(&mut self, step: WizardStep) -> Result<WizardStep, SessionError> {
        if step > self.step {
            return Err(SessionError::InvalidTransition {
                from: self.step,
                to: step,
            });
        }
        self.move_to(step);
        Ok(step)
    }

    fn unmet_prerequisite(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::Import if self.job_requirement().is_none() => {
                Some("the job description has not been analyzed")
            }
            WizardStep::Upload | WizardStep::Review if self.assessments.is_empty() => {
                Some("no resumes have been analyzed")
            }
            WizardStep::Shortlist if self.shortlist.is_empty() => {
                Some("the shortlist is empty")
            }
            _ => None,
        }
    }

    pub(crate) fn move_to(&mut self, step: WizardStep) {
        if step != self.step {
            info!("Session {} moved from {} to {}", self.id, self.step, step);
            self.step = step;
        }
    }

    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            id: self.id,
            created_at: self.created_at,
            step: self.step,
            step_number: self.step.number(),
            step_label: self.step.label(),
            has_job_description: !self.jd_text.trim().is_empty(),
            job_title: self
                .job_requirement()
                .and_then(|job| job.title.clone())
                .filter(|title| !title.trim().is_empty()),
            resumes: self.resume_texts.len(),
            assessments: self.assessments.iter().filter(|r| !r.is_error()).count(),
            failed_assessments: self.assessments.iter().filter(|r| r.is_error()).count(),
            shortlisted: self.shortlist.len(),
            selected_candidate: self.selected_candidate.clone(),
            has_invitation: self.invitation.is_some(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct SessionOverview {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub step: WizardStep,
    pub step_number: u8,
    pub step_label: &'static str,
    pub has_job_description: bool,
    pub job_title: Option<String>,
    pub resumes: usize,
    pub assessments: usize,
    pub failed_assessments: usize,
    pub shortlisted: usize,
    pub selected_candidate: Option<String>,
    pub has_invitation: bool,
}
