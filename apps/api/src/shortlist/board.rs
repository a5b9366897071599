//! Every assessed candidate, with shortlist membership and a match band.

use serde::{Deserialize, Serialize};

use crate::extraction::{CandidateAssessment, ExtractionResult};
use crate::shortlist::ranker::{positioned, Shortlist, ShortlistEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => MatchBand::High,
            50..=69 => MatchBand::Medium,
            _ => MatchBand::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    MatchDesc,
    MatchAsc,
    NameAsc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardEntry {
    /// 1-based position in the assessment list.
    pub position: usize,
    #[serde(flatten)]
    pub entry: ShortlistEntry,
    pub shortlisted: bool,
    pub band: MatchBand,
}

/// Projects successful assessments onto board rows, labelled the same way as
/// the shortlist.
pub fn candidate_board(
    results: &[ExtractionResult<CandidateAssessment>],
    shortlist: &Shortlist,
    sort: SortOrder,
) -> Vec<BoardEntry> {
    let mut board: Vec<BoardEntry> = positioned(results)
        .map(|(position, assessment)| {
            let entry = ShortlistEntry::new(assessment, position);
            BoardEntry {
                position,
                shortlisted: shortlist.contains(&entry.name),
                band: MatchBand::for_score(entry.match_percentage),
                entry,
            }
        })
        .collect();

    match sort {
        SortOrder::MatchDesc => {
            board.sort_by(|a, b| b.entry.match_percentage.cmp(&a.entry.match_percentage))
        }
        SortOrder::MatchAsc => board.sort_by_key(|row| row.entry.match_percentage),
        SortOrder::NameAsc => board.sort_by(|a, b| a.entry.name.cmp(&b.entry.name)),
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::records::Percentage;
    use crate::shortlist::ranker::rank_candidates;
    use crate::shortlist::ranker::tests::assessed;

    fn names(board: &[BoardEntry]) -> Vec<&str> {
        board.iter().map(|row| row.entry.name.as_str()).collect()
    }

    #[test]
    fn test_bands() {
        assert_eq!(MatchBand::for_score(100), MatchBand::High);
        assert_eq!(MatchBand::for_score(70), MatchBand::High);
        assert_eq!(MatchBand::for_score(69), MatchBand::Medium);
        assert_eq!(MatchBand::for_score(50), MatchBand::Medium);
        assert_eq!(MatchBand::for_score(49), MatchBand::Low);
    }

    #[test]
    fn test_sort_orders() {
        let results = vec![assessed("Cy", 60), assessed("Ada", 90), assessed("Ben", 40)];
        let shortlist = Shortlist::default();

        let board = candidate_board(&results, &shortlist, SortOrder::MatchDesc);
        assert_eq!(names(&board), vec!["Ada", "Cy", "Ben"]);
        let board = candidate_board(&results, &shortlist, SortOrder::MatchAsc);
        assert_eq!(names(&board), vec!["Ben", "Cy", "Ada"]);
        let board = candidate_board(&results, &shortlist, SortOrder::NameAsc);
        assert_eq!(names(&board), vec!["Ada", "Ben", "Cy"]);
    }

    #[test]
    fn test_unnamed_and_failed_candidates() {
        let results = vec![
            ExtractionResult::failed("Failed to analyze CV: boom"),
            ExtractionResult::Record(CandidateAssessment::default()),
            assessed("Ada", 75),
        ];
        let mut shortlist = Shortlist::default();
        shortlist.toggle(ShortlistEntry::new(results[2].record().unwrap(), 3));

        let board = candidate_board(&results, &shortlist, SortOrder::NameAsc);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].entry.name, "Ada");
        assert!(board[0].shortlisted);
        assert_eq!(board[0].position, 3);
        assert_eq!(board[1].entry.name, "Candidate 2");
        assert!(!board[1].shortlisted);
        assert_eq!(board[1].band, MatchBand::Low);
    }

    #[test]
    fn test_unnamed_shortlisted_candidate_matches_board_row() {
        let results = vec![
            ExtractionResult::Record(CandidateAssessment {
                overall_match: Percentage::new(88),
                ..Default::default()
            }),
            assessed("Ada", 60),
        ];
        let mut shortlist = Shortlist::from_entries(rank_candidates(&results, 70));

        let board = candidate_board(&results, &shortlist, SortOrder::MatchDesc);
        assert_eq!(board[0].entry.name, "Candidate 1");
        assert!(board[0].shortlisted);

        assert!(!shortlist.toggle(board[0].entry.clone()));
        assert!(shortlist.is_empty());
    }
}
