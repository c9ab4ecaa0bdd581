//! Tolerant extraction of structured values from free-form ticket text.
//!
//! Priority tiers (`"P0"`), pod designators (`"Pod 7"`), and rack
//! designators (`"Rack 42U"`) all arrive as human-written text. The
//! extractors here are case-insensitive and whitespace-tolerant, and they
//! are total: anything that does not match yields `None`. Ranking code
//! maps `None` to [`UNRANKED`] so malformed items sort last
//! deterministically instead of failing.

mod fields;

pub use fields::{email_like, leading_number, pod_number, priority_value, rack_number, UNRANKED};
