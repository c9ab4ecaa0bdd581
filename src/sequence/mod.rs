//! Work-order sequencing engine.
//!
//! Ranks the tickets that are ready for work into a travel-efficient
//! visiting order: priority tier first, then pod, then rack, so a
//! technician handles the most urgent tickets first and walks the floor
//! pod by pod within a tier.
//!
//! The engine itself is generic. Ranking criteria are [`RankRule`]s
//! composed in precedence order (a later rule is only consulted when
//! every earlier rule produced a tie), and the board's canonical rule
//! stack is provided by [`Sequencer::work_block`].
//!
//! Ordering is stable and total: items whose tier or location cannot be
//! parsed rank last deterministically, ties preserve input order, and
//! nothing in this module ever fails.

mod engine;
mod rules;
mod types;

pub use engine::Sequencer;
pub use rules::{order_work_block, ByPod, ByRack, ByTier};
pub use types::RankRule;
