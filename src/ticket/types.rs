//! Core ticket types shared across the crate.

use crate::parse;
use chrono::{DateTime, Utc};
use std::fmt;

/// Ordinal urgency label of the form `P<n>`; lower `n` is more urgent.
///
/// Observed tiers run P0 (critical) through P4 (very low), but any label
/// is tolerated: a tier that does not match the pattern simply has no
/// numeric value and ranks after every tier that does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriorityTier(String);

impl PriorityTier {
    /// Wraps a tier label verbatim.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as written ("P0", "URGENT", ...).
    pub fn label(&self) -> &str {
        &self.0
    }

    /// The numeric urgency value, if the label parses.
    ///
    /// `"P0"` -> `Some(0)`; labels outside the `P<n>` pattern -> `None`.
    pub fn value(&self) -> Option<u32> {
        parse::priority_value(&self.0)
    }
}

impl From<&str> for PriorityTier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for PriorityTier {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a ticket sits on the board.
///
/// Only `Ready` tickets are eligible for work-order sequencing; the other
/// states pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LifecycleState {
    /// Eligible for sequencing into a work block.
    Ready,
    /// A technician has started the work.
    InProgress,
    /// Work finished.
    Complete,
}

impl LifecycleState {
    /// Whether a ticket in this state participates in sequencing.
    pub fn is_ready(self) -> bool {
        matches!(self, LifecycleState::Ready)
    }
}

/// A maintenance work item as it appears on the board.
///
/// All fields are plain data; the only derived views are the accessors
/// that parse physical coordinates out of the location text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    /// Opaque unique token.
    pub id: String,
    /// Short human label, e.g. "Install H100 GPU in Pod 7".
    pub title: String,
    pub priority: PriorityTier,
    pub state: LifecycleState,
    /// Device the work applies to ("H100", "PDU", "Switch", ...).
    pub device: String,
    /// Free-form location text embedding pod and rack designators,
    /// e.g. "Pod 7, Rack 42U".
    pub location: String,
    pub description: String,
    pub estimated_duration_minutes: u32,
    /// Stamped by the persistence layer, not by this crate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assigned_to: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_parts: Vec<String>,
    /// Findings attached at validation time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub warnings: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suggestions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority_justification: Option<String>,
}

impl Ticket {
    /// Creates a `Ready` ticket with the given identity and coordinates.
    ///
    /// The remaining fields start empty and are filled in builder style.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: impl Into<PriorityTier>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: priority.into(),
            state: LifecycleState::Ready,
            device: String::new(),
            location: location.into(),
            description: String::new(),
            estimated_duration_minutes: 0,
            created_at: None,
            assigned_to: None,
            required_parts: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            priority_justification: None,
        }
    }

    pub fn with_state(mut self, state: LifecycleState) -> Self {
        self.state = state;
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = device.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    pub fn with_assigned_to(mut self, email: impl Into<String>) -> Self {
        self.assigned_to = Some(email.into());
        self
    }

    pub fn with_required_parts(mut self, parts: Vec<String>) -> Self {
        self.required_parts = parts;
        self
    }

    /// The pod number parsed from the location text, if present.
    pub fn pod(&self) -> Option<u32> {
        parse::pod_number(&self.location)
    }

    /// The rack number parsed from the location text, if present.
    pub fn rack(&self) -> Option<u32> {
        parse::rack_number(&self.location)
    }
}
