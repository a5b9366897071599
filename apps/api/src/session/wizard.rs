//! The five-step recruiting wizard as a small state machine.
//!
//! Forward moves go one step at a time and only when the current step's work
//! is done. Backward moves are always allowed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Import,
    Upload,
    Review,
    Shortlist,
    Schedule,
}

impl WizardStep {
    /// 1-based position in the wizard.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Import => 1,
            WizardStep::Upload => 2,
            WizardStep::Review => 3,
            WizardStep::Shortlist => 4,
            WizardStep::Schedule => 5,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Import => Some(WizardStep::Upload),
            WizardStep::Upload => Some(WizardStep::Review),
            WizardStep::Review => Some(WizardStep::Shortlist),
            WizardStep::Shortlist => Some(WizardStep::Schedule),
            WizardStep::Schedule => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Import => None,
            WizardStep::Upload => Some(WizardStep::Import),
            WizardStep::Review => Some(WizardStep::Upload),
            WizardStep::Shortlist => Some(WizardStep::Review),
            WizardStep::Schedule => Some(WizardStep::Shortlist),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Import => "Import Job Description",
            WizardStep::Upload => "Upload Resumes",
            WizardStep::Review => "Review Analysis",
            WizardStep::Shortlist => "Shortlist Candidates",
            WizardStep::Schedule => "Schedule Interviews",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.label())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("This action belongs to {expected}, but the session is at {actual}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Cannot jump ahead from {from} to {to}")]
    InvalidTransition { from: WizardStep, to: WizardStep },

    #[error("Cannot leave {step}: {reason}")]
    MissingPrerequisite {
        step: WizardStep,
        reason: &'static str,
    },

    #[error("{0} is the last step")]
    NoNextStep(WizardStep),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_linear() {
        let mut step = WizardStep::Import;
        let mut seen = vec![step.number()];
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
            seen.push(step.number());
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(WizardStep::Import.previous(), None);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_value(WizardStep::Shortlist).unwrap(), "shortlist");
        let step: WizardStep = serde_json::from_str("\"review\"").unwrap();
        assert_eq!(step, WizardStep::Review);
    }

    #[test]
    fn test_error_message_names_both_steps() {
        let err = SessionError::WrongStep {
            expected: WizardStep::Schedule,
            actual: WizardStep::Upload,
        };
        assert_eq!(
            err.to_string(),
            "This action belongs to step 5 (Schedule Interviews), but the session is at step 2 (Upload Resumes)"
        );
    }
}
