//! Typed records produced by the extractors.
//!
//! Wire keys follow the JSON schema the prompts ask for (`JobTitle`,
//! `OverallMatch`, ...). Every field is optional on input: scalars are
//! `Option`, lists default to empty, scores default to 0%. Keys the model adds
//! beyond the schema are kept in `extra` and written back out unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Percentage
// ────────────────────────────────────────────────────────────────────────────

/// Integer percentage, always within 0–100.
///
/// Reads `"85%"`, `"85"`, `85` and `85.4`; anything unreadable becomes 0%.
/// Writes back as `"85%"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);

    pub fn new(value: i64) -> Self {
        Percentage(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        let parsed: f64 = number.parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }
        Some(Self::from_f64(parsed))
    }

    fn from_f64(value: f64) -> Self {
        Percentage(value.round().clamp(0.0, 100.0) as u8)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n
                .as_i64()
                .map(Percentage::new)
                .or_else(|| n.as_f64().map(Percentage::from_f64))
                .unwrap_or_default(),
            Value::String(s) => Percentage::parse(&s).unwrap_or_default(),
            _ => Percentage::ZERO,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Recommendation
// ────────────────────────────────────────────────────────────────────────────

/// The model's verdict on a candidate. Unrecognized text reads as further review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Recommendation {
    Shortlist,
    Reject,
    #[default]
    FurtherReview,
}

impl Recommendation {
    /// Exact values first; free text falls back to keyword matching, where a
    /// negated shortlist reads as a rejection and mixed signals need review.
    pub fn parse(text: &str) -> Self {
        let lowered = text.trim().to_lowercase();
        match lowered.as_str() {
            "shortlist" => return Recommendation::Shortlist,
            "reject" => return Recommendation::Reject,
            "further review" | "further-review" | "further_review" => {
                return Recommendation::FurtherReview
            }
            _ => {}
        }

        let negated = ["not shortlist", "don't shortlist", "do not shortlist"]
            .iter()
            .any(|phrase| lowered.contains(phrase));
        match (lowered.contains("shortlist"), lowered.contains("reject")) {
            (true, _) if negated => Recommendation::Reject,
            (true, false) => Recommendation::Shortlist,
            (false, true) => Recommendation::Reject,
            _ => Recommendation::FurtherReview,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Shortlist => "shortlist",
            Recommendation::Reject => "reject",
            Recommendation::FurtherReview => "further review",
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Recommendation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(Recommendation::parse)
            .unwrap_or_default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field readers
// ────────────────────────────────────────────────────────────────────────────

/// A list of strings; a lone string counts as a one-item list, nulls are dropped.
fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().filter_map(value_to_text).collect(),
        other => value_to_text(other).into_iter().collect(),
    })
}

/// A scalar; numbers and booleans are kept as their text form. An empty
/// string stays an empty string.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_to_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => Some(other.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JobRequirement
// ────────────────────────────────────────────────────────────────────────────

/// Display default for any job scalar the model left out.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Structured summary of a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(rename = "JobTitle", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Department", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "Location", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "EmploymentType", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(rename = "RequiredSkills", default, deserialize_with = "string_list")]
    pub required_skills: Vec<String>,
    #[serde(rename = "RequiredExperience", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub required_experience: Option<String>,
    #[serde(rename = "RequiredQualifications", default, deserialize_with = "string_list")]
    pub required_qualifications: Vec<String>,
    #[serde(rename = "Responsibilities", default, deserialize_with = "string_list")]
    pub responsibilities: Vec<String>,
    #[serde(rename = "SalaryRange", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(rename = "PreferredSkills", default, deserialize_with = "string_list")]
    pub preferred_skills: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl JobRequirement {
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(&self.title).unwrap_or(default)
    }

    pub fn required_experience_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(&self.required_experience).unwrap_or(default)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CandidateAssessment
// ────────────────────────────────────────────────────────────────────────────

pub const UNKNOWN_NAME: &str = "Unknown";
pub const CONTACT_NOT_PROVIDED: &str = "Not provided";

/// One resume scored against a job requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateAssessment {
    #[serde(rename = "CandidateName", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    #[serde(rename = "ContactInfo", default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "string_list")]
    pub skills: Vec<String>,
    #[serde(rename = "Experience", default, deserialize_with = "string_list")]
    pub experience: Vec<String>,
    #[serde(rename = "Education", default, deserialize_with = "string_list")]
    pub education: Vec<String>,
    #[serde(rename = "Certifications", default, deserialize_with = "string_list")]
    pub certifications: Vec<String>,
    #[serde(rename = "SkillMatch", default)]
    pub skill_match: Percentage,
    #[serde(rename = "ExperienceMatch", default)]
    pub experience_match: Percentage,
    #[serde(rename = "QualificationMatch", default)]
    pub qualification_match: Percentage,
    #[serde(rename = "OverallMatch", default)]
    pub overall_match: Percentage,
    #[serde(rename = "MatchedSkills", default, deserialize_with = "string_list")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "MissingSkills", default, deserialize_with = "string_list")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "Strengths", default, deserialize_with = "string_list")]
    pub strengths: Vec<String>,
    #[serde(rename = "Areas_for_Improvement", default, deserialize_with = "string_list")]
    pub areas_for_improvement: Vec<String>,
    #[serde(rename = "Recommendation", default)]
    pub recommendation: Recommendation,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CandidateAssessment {
    pub fn name(&self) -> &str {
        non_blank(&self.candidate_name).unwrap_or(UNKNOWN_NAME)
    }

    pub fn contact(&self) -> &str {
        non_blank(&self.contact_info).unwrap_or(CONTACT_NOT_PROVIDED)
    }
}

/// Display readers treat a blank value like a missing one.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_percentage_reads_many_shapes() {
        let cases = [
            (json!("85%"), 85),
            (json!(" 85 % "), 85),
            (json!("85"), 85),
            (json!(85), 85),
            (json!(84.6), 85),
            (json!("150%"), 100),
            (json!(-4), 0),
            (json!("N/A"), 0),
            (json!(null), 0),
            (json!(["85%"]), 0),
        ];
        for (input, expected) in cases {
            let pct: Percentage = serde_json::from_value(input.clone()).unwrap();
            assert_eq!(pct.value(), expected, "input {input}");
        }
    }

    #[test]
    fn test_percentage_writes_with_sign() {
        assert_eq!(serde_json::to_value(Percentage::new(72)).unwrap(), json!("72%"));
        assert_eq!(Percentage::new(250).to_string(), "100%");
    }

    #[test]
    fn test_recommendation_is_lenient() {
        assert_eq!(Recommendation::parse("Shortlist"), Recommendation::Shortlist);
        assert_eq!(Recommendation::parse("REJECT"), Recommendation::Reject);
        assert_eq!(Recommendation::parse("further-review"), Recommendation::FurtherReview);
        assert_eq!(Recommendation::parse("maybe?"), Recommendation::FurtherReview);
        let rec: Recommendation = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(rec, Recommendation::FurtherReview);
    }

    #[test]
    fn test_recommendation_free_text() {
        assert_eq!(Recommendation::parse(" Shortlist "), Recommendation::Shortlist);
        assert_eq!(Recommendation::parse("Do not shortlist; reject"), Recommendation::Reject);
        assert_eq!(Recommendation::parse("Not shortlisted"), Recommendation::Reject);
        assert_eq!(Recommendation::parse("Strong fit, shortlist"), Recommendation::Shortlist);
        assert_eq!(
            Recommendation::parse("shortlist or reject after a call"),
            Recommendation::FurtherReview
        );
    }

    #[test]
    fn test_empty_scalar_is_kept() {
        let input = json!({"CandidateName": "", "ContactInfo": " ", "Skills": []});
        let candidate: CandidateAssessment = serde_json::from_value(input).unwrap();
        assert_eq!(candidate.candidate_name.as_deref(), Some(""));
        assert_eq!(candidate.name(), UNKNOWN_NAME);
        assert_eq!(candidate.contact(), CONTACT_NOT_PROVIDED);
        assert_eq!(serde_json::to_value(&candidate).unwrap()["CandidateName"], json!(""));
    }

    #[test]
    fn test_job_missing_fields_read_as_absent() {
        let job: JobRequirement = serde_json::from_value(json!({"JobTitle": "Analyst"})).unwrap();
        assert_eq!(job.title_or(NOT_SPECIFIED), "Analyst");
        assert_eq!(job.required_experience_or(NOT_SPECIFIED), NOT_SPECIFIED);
        assert!(job.required_skills.is_empty());
    }

    #[test]
    fn test_job_single_string_list_and_numeric_scalar() {
        let job: JobRequirement = serde_json::from_value(json!({
            "RequiredSkills": "SQL",
            "SalaryRange": 90000,
            "PreferredSkills": null
        }))
        .unwrap();
        assert_eq!(job.required_skills, vec!["SQL"]);
        assert_eq!(job.salary_range.as_deref(), Some("90000"));
        assert!(job.preferred_skills.is_empty());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let input = json!({"JobTitle": "Analyst", "RequiredSkills": [], "RequiredQualifications": [],
            "Responsibilities": [], "PreferredSkills": [], "Remote": true});
        let job: JobRequirement = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(job.extra.get("Remote"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&job).unwrap(), input);
    }

    #[test]
    fn test_candidate_accessor_defaults() {
        let candidate = CandidateAssessment::default();
        assert_eq!(candidate.name(), UNKNOWN_NAME);
        assert_eq!(candidate.contact(), CONTACT_NOT_PROVIDED);
        assert_eq!(candidate.overall_match, Percentage::ZERO);
        assert_eq!(candidate.recommendation, Recommendation::FurtherReview);
    }
}
