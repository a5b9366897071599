use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};

/// Business days offered to a candidate.
pub const BUSINESS_DAYS_OFFERED: usize = 3;
/// Times drawn per business day.
pub const TIMES_PER_DAY: usize = 2;
/// Slots shown in an invitation.
pub const MAX_PRESENTED_SLOTS: usize = 5;

const INTERVIEW_TIMES: [(u32, u32); 4] = [(10, 0), (11, 30), (14, 0), (15, 30)];

/// One interview date and start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for ProposedSlot {
    /// `Monday, March 03, 2025 at 10:00 AM`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.date.format("%A, %B %d, %Y"),
            self.time.format("%-I:%M %p")
        )
    }
}

impl Serialize for ProposedSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The next `count` weekdays strictly after `after`.
pub fn business_days(after: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (1..)
        .map(|offset| after + Duration::days(offset))
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .take(count)
        .collect()
}

/// Two distinct times on each of the next three business days.
pub fn candidate_slots<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<ProposedSlot> {
    let times: Vec<NaiveTime> = INTERVIEW_TIMES
        .iter()
        .filter_map(|&(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect();

    business_days(today, BUSINESS_DAYS_OFFERED)
        .into_iter()
        .flat_map(|date| {
            times
                .choose_multiple(&mut *rng, TIMES_PER_DAY)
                .map(|&time| ProposedSlot { date, time })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// The slots an invitation offers: at most five.
pub fn propose_slots<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<ProposedSlot> {
    let mut slots = candidate_slots(today, rng);
    slots.truncate(MAX_PRESENTED_SLOTS);
    slots
}
