//! Structured extraction: job descriptions and resumes into typed records.
//!
//! Model output is normalized, parsed strictly, and on failure recovered field
//! by field with regexes. The only failure a caller sees is an `ErrorRecord`,
//! produced when the model call itself fails or comes back empty.

pub mod candidate;
pub mod fallback;
pub mod handlers;
pub mod job;
pub mod normalize;
pub mod prompts;
pub mod records;

use serde::Serialize;

pub use candidate::assess_candidate;
pub use job::summarize_job_description;
pub use records::{CandidateAssessment, JobRequirement, Recommendation};

/// `{ "error": message }` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

/// Either an extracted record or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResult<T> {
    Record(T),
    Failed(ErrorRecord),
}

impl<T> ExtractionResult<T> {
    pub fn failed(message: impl Into<String>) -> Self {
        ExtractionResult::Failed(ErrorRecord {
            error: message.into(),
        })
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            ExtractionResult::Record(record) => Some(record),
            ExtractionResult::Failed(_) => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionResult::Record(_) => None,
            ExtractionResult::Failed(failed) => Some(&failed.error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionResult::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_record_wire_shape() {
        let result: ExtractionResult<JobRequirement> = ExtractionResult::failed("boom");
        assert!(result.is_error());
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"error": "boom"}));
    }

    #[test]
    fn test_record_serializes_transparently() {
        let job = JobRequirement {
            title: Some("Analyst".to_string()),
            ..Default::default()
        };
        let result = ExtractionResult::Record(job);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["JobTitle"], json!("Analyst"));
        assert!(result.error().is_none());
    }
}
