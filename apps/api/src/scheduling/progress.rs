use serde::Serialize;

use crate::scheduling::invitation::InterviewInvitation;
use crate::shortlist::Shortlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScheduleStatus {
    #[serde(rename = "Email Generated")]
    EmailGenerated,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub name: String,
    pub contact: String,
    pub match_percentage: u8,
    pub status: ScheduleStatus,
}

/// One row per shortlisted candidate. Only the candidate whose invitation is
/// current counts as generated.
pub fn schedule_progress(
    shortlist: &Shortlist,
    current: Option<&InterviewInvitation>,
) -> Vec<ScheduleRow> {
    shortlist
        .iter()
        .map(|entry| {
            let generated = current.is_some_and(|inv| inv.candidate_name == entry.name);
            ScheduleRow {
                name: entry.name.clone(),
                contact: entry.contact.clone(),
                match_percentage: entry.match_percentage,
                status: if generated {
                    ScheduleStatus::EmailGenerated
                } else {
                    ScheduleStatus::Pending
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortlist::ranker::tests::assessed;
    use crate::shortlist::rank_candidates;

    #[test]
    fn test_only_current_candidate_is_generated() {
        let shortlist =
            Shortlist::from_entries(rank_candidates(&[assessed("Ada", 90), assessed("Ben", 80)], 70));
        let invitation = InterviewInvitation {
            candidate_name: "Ben".to_string(),
            candidate_contact: "ben@example.com".to_string(),
            subject: String::new(),
            body: String::new(),
            proposed_slots: vec![],
        };

        let rows = schedule_progress(&shortlist, Some(&invitation));
        assert_eq!(rows[0].status, ScheduleStatus::Pending);
        assert_eq!(rows[1].status, ScheduleStatus::EmailGenerated);
        assert_eq!(
            serde_json::to_value(&rows[1]).unwrap()["status"],
            serde_json::json!("Email Generated")
        );

        let rows = schedule_progress(&shortlist, None);
        assert!(rows.iter().all(|row| row.status == ScheduleStatus::Pending));
    }
}
