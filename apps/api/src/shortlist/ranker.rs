use serde::Serialize;

use crate::extraction::candidate::UNKNOWN_CANDIDATE;
use crate::extraction::{CandidateAssessment, ExtractionResult, Recommendation};

/// The part of an assessment the shortlist and invitations work from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistEntry {
    pub name: String,
    pub contact: String,
    pub match_percentage: u8,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: Recommendation,
}

/// The name a candidate is listed and keyed under.
///
/// `position` is the 1-based index in the assessment list. A candidate the
/// model could not name is `Candidate N`, so unnamed candidates never share a
/// key.
pub fn candidate_label(assessment: &CandidateAssessment, position: usize) -> String {
    match assessment.candidate_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() && name != UNKNOWN_CANDIDATE => name.to_string(),
        _ => format!("Candidate {position}"),
    }
}

/// Successful assessments with their 1-based positions in `results`.
pub(crate) fn positioned(
    results: &[ExtractionResult<CandidateAssessment>],
) -> impl Iterator<Item = (usize, &CandidateAssessment)> {
    results
        .iter()
        .enumerate()
        .filter_map(|(idx, result)| result.record().map(|assessment| (idx + 1, assessment)))
}

impl ShortlistEntry {
    pub fn new(assessment: &CandidateAssessment, position: usize) -> Self {
        Self {
            name: candidate_label(assessment, position),
            contact: assessment.contact().to_string(),
            match_percentage: assessment.overall_match.value(),
            strengths: assessment.strengths.clone(),
            missing_skills: assessment.missing_skills.clone(),
            recommendation: assessment.recommendation,
        }
    }
}

/// Candidates at or above `threshold`, best first.
///
/// Error records are skipped. The sort is stable, so equal scores keep their
/// input order.
pub fn rank_candidates(
    results: &[ExtractionResult<CandidateAssessment>],
    threshold: u8,
) -> Vec<ShortlistEntry> {
    let mut ranked: Vec<ShortlistEntry> = positioned(results)
        .filter(|(_, assessment)| assessment.overall_match.value() >= threshold)
        .map(|(position, assessment)| ShortlistEntry::new(assessment, position))
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked
}

/// Ordered set of shortlisted candidates, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Shortlist {
    entries: Vec<ShortlistEntry>,
}

impl Shortlist {
    /// Keeps the first entry for each name.
    pub fn from_entries(entries: Vec<ShortlistEntry>) -> Self {
        let mut shortlist = Shortlist::default();
        for entry in entries {
            if !shortlist.contains(&entry.name) {
                shortlist.entries.push(entry);
            }
        }
        shortlist
    }

    /// Adds the entry if its name is absent, removes it otherwise.
    /// Returns whether the name is on the shortlist afterwards.
    pub fn toggle(&mut self, entry: ShortlistEntry) -> bool {
        match self.position(&entry.name) {
            Some(idx) => {
                self.entries.remove(idx);
                false
            }
            None => {
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&ShortlistEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortlistEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::extraction::records::Percentage;

    pub(crate) fn assessed(name: &str, overall: i64) -> ExtractionResult<CandidateAssessment> {
        ExtractionResult::Record(CandidateAssessment {
            candidate_name: Some(name.to_string()),
            contact_info: Some(format!("{}@example.com", name.to_lowercase())),
            overall_match: Percentage::new(overall),
            strengths: vec![format!("{name} strength")],
            ..Default::default()
        })
    }

    fn scores(entries: &[ShortlistEntry]) -> Vec<u8> {
        entries.iter().map(|entry| entry.match_percentage).collect()
    }

    #[test]
    fn test_threshold_filters_and_sorts() {
        let results = vec![
            assessed("Ada", 90),
            assessed("Ben", 70),
            assessed("Cy", 69),
            ExtractionResult::failed("Failed to analyze CV: timeout"),
            assessed("Dee", 85),
        ];
        assert_eq!(scores(&rank_candidates(&results, 70)), vec![90, 85, 70]);
        assert!(rank_candidates(&results, 95).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let results = vec![assessed("First", 80), assessed("Top", 95), assessed("Second", 80)];
        let names: Vec<String> = rank_candidates(&results, 0)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["Top", "First", "Second"]);
    }

    #[test]
    fn test_missing_score_reads_as_zero() {
        let results = vec![ExtractionResult::Record(CandidateAssessment::default())];
        assert!(rank_candidates(&results, 1).is_empty());
        let kept = rank_candidates(&results, 0);
        assert_eq!(kept[0].name, "Candidate 1");
        assert_eq!(kept[0].contact, "Not provided");
    }

    #[test]
    fn test_unnamed_candidates_get_distinct_labels() {
        let unnamed = |overall: i64, name: Option<&str>| {
            ExtractionResult::Record(CandidateAssessment {
                candidate_name: name.map(str::to_string),
                overall_match: Percentage::new(overall),
                ..Default::default()
            })
        };
        let results = vec![
            unnamed(80, None),
            ExtractionResult::failed("Failed to analyze CV: boom"),
            unnamed(90, Some("Unknown Candidate")),
            unnamed(75, Some("  ")),
        ];

        let shortlist = Shortlist::from_entries(rank_candidates(&results, 70));
        let names: Vec<&str> = shortlist.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Candidate 3", "Candidate 1", "Candidate 4"]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let entry = ShortlistEntry::new(assessed("Ada", 90).record().unwrap(), 1);
        let mut shortlist = Shortlist::default();

        assert!(shortlist.toggle(entry.clone()));
        assert!(shortlist.contains("Ada"));
        assert!(!shortlist.toggle(entry));
        assert!(shortlist.is_empty());
    }

    #[test]
    fn test_from_entries_deduplicates_names() {
        let results = vec![assessed("Ada", 90), assessed("Ada", 75), assessed("Ben", 80)];
        let shortlist = Shortlist::from_entries(rank_candidates(&results, 70));
        assert_eq!(shortlist.len(), 2);
        assert_eq!(shortlist.get("Ada").map(|e| e.match_percentage), Some(90));
    }
}
