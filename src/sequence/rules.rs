//! Board ranking rules and the canonical work-block ordering.

use super::engine::Sequencer;
use super::types::RankRule;
use crate::parse::{pod_number, rack_number, UNRANKED};
use crate::ticket::Ticket;

/// Ranks tickets by the numeric value of their priority tier (P0 first).
///
/// Tiers that do not parse ("URGENT", empty) rank [`UNRANKED`].
pub struct ByTier;

impl RankRule<Ticket> for ByTier {
    fn name(&self) -> &str {
        "ByTier"
    }

    fn key(&self, ticket: &Ticket) -> u32 {
        ticket.priority.value().unwrap_or(UNRANKED)
    }
}

/// Ranks tickets by the pod number in their location text.
pub struct ByPod;

impl RankRule<Ticket> for ByPod {
    fn name(&self) -> &str {
        "ByPod"
    }

    fn key(&self, ticket: &Ticket) -> u32 {
        pod_number(&ticket.location).unwrap_or(UNRANKED)
    }
}

/// Ranks tickets by the rack number in their location text.
pub struct ByRack;

impl RankRule<Ticket> for ByRack {
    fn name(&self) -> &str {
        "ByRack"
    }

    fn key(&self, ticket: &Ticket) -> u32 {
        rack_number(&ticket.location).unwrap_or(UNRANKED)
    }
}

impl Sequencer<Ticket> {
    /// The board's canonical work-block ordering: priority tier, then
    /// pod, then rack.
    pub fn work_block() -> Self {
        Sequencer::new()
            .with_rule(ByTier)
            .with_rule(ByPod)
            .with_rule(ByRack)
    }
}

/// Sequences a board snapshot into work-block order.
///
/// Only tickets in the `Ready` state are reordered; every other ticket
/// keeps its exact position. The result is a permutation of the input —
/// nothing is dropped, mutated, or invented, and malformed tiers or
/// locations simply rank last within their key position.
pub fn order_work_block(tickets: Vec<Ticket>) -> Vec<Ticket> {
    Sequencer::work_block().resequence(tickets, |ticket| ticket.state.is_ready())
}
