//! Threshold filtering, ranking and the mutable shortlist.

pub mod board;
pub mod handlers;
pub mod ranker;

pub use board::{candidate_board, BoardEntry, SortOrder};
pub use ranker::{rank_candidates, Shortlist, ShortlistEntry};
