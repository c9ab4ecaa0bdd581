//! Ticket domain model.
//!
//! The board's unit of work: a [`Ticket`] carries an urgency tier, a
//! lifecycle state, and a free-form location string from which the
//! sequencing engine extracts physical coordinates. Nothing here touches
//! storage or transport; tickets are plain data handed in and out by the
//! caller.

mod types;

pub use types::{LifecycleState, PriorityTier, Ticket};
