//! Triage rules.

use crate::intake::{Action, TicketDraft};
use crate::ticket::PriorityTier;
use crate::validate::ValidationReport;

/// Keywords that signal production impact when they appear in a draft's
/// free-text fields.
const URGENCY_KEYWORDS: &[&str] = &["production", "down", "outage", "critical", "urgent"];

/// Lowest tier a suggestion can demote to.
const FLOOR_TIER: u32 = 4;

/// A suggested triage outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityAssignment {
    pub tier: PriorityTier,
    pub justification: String,
    pub estimated_duration_minutes: u32,
}

/// Suggests a priority tier for a draft.
///
/// Total and deterministic: every draft gets an assignment. Corrective
/// work with urgency language goes to P0, urgency language alone to P1,
/// corrective work alone to P2, and everything else to the P3 / 30-minute
/// fallback. A stock warning in the report demotes the result one tier.
pub fn suggest(draft: &TicketDraft, report: &ValidationReport) -> PriorityAssignment {
    let urgent = mentions_urgency(draft);
    let corrective = draft.action.is_some_and(Action::is_corrective);
    let blocked = waiting_on_parts(report);

    let (mut tier, base) = match (urgent, corrective) {
        (true, true) => (0, "production-impacting fault; corrective work goes first"),
        (true, false) => (1, "urgency language present; production at risk"),
        (false, true) => (2, "corrective maintenance on existing equipment"),
        (false, false) => (3, "standard installation or routine request"),
    };

    let mut justification = base.to_string();
    if blocked {
        tier = (tier + 1).min(FLOOR_TIER);
        justification.push_str("; parts availability blocks the start");
    }

    PriorityAssignment {
        tier: PriorityTier::new(format!("P{tier}")),
        justification,
        estimated_duration_minutes: estimate_minutes(draft),
    }
}

fn mentions_urgency(draft: &TicketDraft) -> bool {
    let mut haystack = String::new();
    for text in [draft.description.as_deref(), draft.device.as_deref()] {
        if let Some(text) = text {
            haystack.push_str(&text.to_ascii_lowercase());
            haystack.push(' ');
        }
    }
    URGENCY_KEYWORDS.iter().any(|kw| haystack.contains(kw))
}

fn waiting_on_parts(report: &ValidationReport) -> bool {
    report
        .warnings
        .iter()
        .any(|warning| warning.to_ascii_lowercase().contains("stock"))
}

/// Rough duration table per device class, minutes.
///
/// Figures come from historical averages on the board; anything
/// unrecognized gets the 30-minute fallback.
fn estimate_minutes(draft: &TicketDraft) -> u32 {
    let device = draft
        .device
        .as_deref()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if ["h100", "a100", "h200", "gpu"].iter().any(|d| device.contains(d)) {
        45
    } else if device.contains("switch") {
        60
    } else if device.contains("pdu") {
        30
    } else if device.contains("server") {
        20
    } else if device.contains("cable") {
        15
    } else {
        30
    }
}
