//! Priority suggestion.
//!
//! Deterministic triage for freshly drafted tickets: maps a draft and its
//! validation findings to a P0-P4 tier with a short justification and a
//! duration estimate. The rubric follows board practice (P0 production
//! down, P1 production at risk, P2 corrective maintenance, P3 standard
//! installs and routine requests, P4 nice-to-have). Inventory gaps demote
//! a step because the work cannot start until parts arrive.

mod assign;

pub use assign::{suggest, PriorityAssignment};
