//! Draft accumulation and finalization.

use crate::parse;
use crate::priority;
use crate::ticket::{LifecycleState, Ticket};
use crate::validate;
use std::fmt;
use std::str::FromStr;

/// Fields that must be captured before a draft can be finalized, in the
/// order they are reported back to the user.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "device",
    "pod",
    "rack",
    "switch",
    "ports",
    "required_parts",
    "action",
    "assign_to_email",
];

/// What the technician is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Action {
    Fix,
    Install,
    Replace,
    Upgrade,
}

impl Action {
    /// Whether this action corrects existing equipment rather than adding
    /// new capacity. Corrective work triages higher.
    pub fn is_corrective(self) -> bool {
        matches!(self, Action::Fix | Action::Replace)
    }

    /// Title-case verb for composing human-facing labels.
    pub fn verb(self) -> &'static str {
        match self {
            Action::Fix => "Fix",
            Action::Install => "Install",
            Action::Replace => "Replace",
            Action::Upgrade => "Upgrade",
        }
    }
}

impl FromStr for Action {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIX" => Ok(Action::Fix),
            "INSTALL" => Ok(Action::Install),
            "REPLACE" => Ok(Action::Replace),
            "UPGRADE" => Ok(Action::Upgrade),
            _ => Err(IntakeError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wire form, matching the extraction vocabulary.
        f.write_str(match self {
            Action::Fix => "FIX",
            Action::Install => "INSTALL",
            Action::Replace => "REPLACE",
            Action::Upgrade => "UPGRADE",
        })
    }
}

/// Why a draft could not be finalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// Required fields have not been captured yet.
    #[error("draft is incomplete: missing {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    /// The assignee does not look like an email address.
    #[error("invalid assignee email: {0}")]
    InvalidEmail(String),

    /// The action label is not one of FIX, INSTALL, REPLACE, UPGRADE.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Accumulated ticket fields, built up one extraction at a time.
///
/// Every field is optional until [`finalize`](TicketDraft::finalize);
/// [`merge`](TicketDraft::merge) folds a new extraction in without
/// erasing anything already captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TicketDraft {
    pub device: Option<String>,
    /// Pod designator as extracted ("Pod 7" or bare "7").
    pub pod: Option<String>,
    /// Rack designator as extracted ("42U" or "Rack 42U").
    pub rack: Option<String>,
    pub switch: Option<String>,
    pub ports: Option<Vec<String>>,
    pub required_parts: Option<Vec<String>>,
    pub action: Option<Action>,
    pub description: Option<String>,
    pub assign_to_email: Option<String>,
}

impl TicketDraft {
    /// Folds one turn's extraction into the accumulated draft.
    ///
    /// A field is only overwritten by a present, non-empty value; `None`,
    /// blank strings, and empty lists leave the accumulated value alone,
    /// so an extraction that saw nothing for a field never regresses it.
    pub fn merge(&mut self, extracted: TicketDraft) {
        merge_text(&mut self.device, extracted.device);
        merge_text(&mut self.pod, extracted.pod);
        merge_text(&mut self.rack, extracted.rack);
        merge_text(&mut self.switch, extracted.switch);
        merge_list(&mut self.ports, extracted.ports);
        merge_list(&mut self.required_parts, extracted.required_parts);
        merge_text(&mut self.description, extracted.description);
        merge_text(&mut self.assign_to_email, extracted.assign_to_email);
        if let Some(action) = extracted.action {
            self.action = Some(action);
        }
    }

    /// Required fields still missing, in reporting order.
    ///
    /// A field counts as missing when unset or effectively empty (blank
    /// string, empty list).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.device) {
            missing.push("device");
        }
        if is_blank(&self.pod) {
            missing.push("pod");
        }
        if is_blank(&self.rack) {
            missing.push("rack");
        }
        if is_blank(&self.switch) {
            missing.push("switch");
        }
        if self.ports.as_deref().is_none_or(<[String]>::is_empty) {
            missing.push("ports");
        }
        if self.required_parts.as_deref().is_none_or(<[String]>::is_empty) {
            missing.push("required_parts");
        }
        if self.action.is_none() {
            missing.push("action");
        }
        if is_blank(&self.assign_to_email) {
            missing.push("assign_to_email");
        }
        missing
    }

    /// Whether every required field has been captured.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Builds a board-ready ticket from a complete draft.
    ///
    /// Fails with the full missing-field list when the draft is
    /// incomplete, so the caller can prompt for everything at once, or
    /// with an invalid-assignee error when the email is malformed. On
    /// success the ticket starts `Ready`, carries the validation findings,
    /// and takes its tier and duration from the triage suggestion. The
    /// creation timestamp is left for the persistence layer to stamp.
    pub fn finalize(&self, id: impl Into<String>) -> Result<Ticket, IntakeError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IntakeError::Incomplete(missing));
        }

        let email = self.assign_to_email.clone().unwrap_or_default();
        if !parse::email_like(&email) {
            return Err(IntakeError::InvalidEmail(email));
        }
        let Some(action) = self.action else {
            return Err(IntakeError::Incomplete(vec!["action"]));
        };

        let report = validate::evaluate(self);
        let assignment = priority::suggest(self, &report);

        let device = self.device.clone().unwrap_or_default();
        let pod = designator(self.pod.as_deref().unwrap_or_default(), "Pod");
        let rack = designator(self.rack.as_deref().unwrap_or_default(), "Rack");

        let mut ticket = Ticket::new(
            id,
            format!("{} {} in {}", action.verb(), device, pod),
            assignment.tier,
            format!("{pod}, {rack}"),
        )
        .with_state(LifecycleState::Ready)
        .with_device(device)
        .with_description(self.description.clone().unwrap_or_default())
        .with_estimated_duration(assignment.estimated_duration_minutes)
        .with_assigned_to(email)
        .with_required_parts(self.required_parts.clone().unwrap_or_default());

        ticket.warnings = report.warnings;
        ticket.suggestions = report.suggestions;
        ticket.priority_justification = Some(assignment.justification);
        Ok(ticket)
    }
}

/// Prefixes the designator token unless the text already carries it:
/// `("7", "Pod")` -> `"Pod 7"`, `("Pod 7", "Pod")` stays as written.
fn designator(text: &str, token: &str) -> String {
    let trimmed = text.trim();
    if trimmed
        .to_ascii_lowercase()
        .contains(&token.to_ascii_lowercase())
    {
        trimmed.to_string()
    } else {
        format!("{token} {trimmed}")
    }
}

fn is_blank(slot: &Option<String>) -> bool {
    slot.as_deref().is_none_or(|s| s.trim().is_empty())
}

fn merge_text(slot: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = incoming {
        if !value.trim().is_empty() {
            *slot = Some(value);
        }
    }
}

fn merge_list(slot: &mut Option<Vec<String>>, incoming: Option<Vec<String>>) {
    if let Some(values) = incoming {
        if !values.is_empty() {
            *slot = Some(values);
        }
    }
}
