//! Interview slots, invitation drafting and hand-off to the mail client.

pub mod handlers;
pub mod invitation;
pub mod mailto;
pub mod progress;
pub mod prompts;
pub mod slots;

pub use invitation::{draft_invitation, InterviewInvitation};
pub use mailto::{mailto_link, plain_text};
pub use progress::{schedule_progress, ScheduleRow};
pub use slots::propose_slots;
