//! Validation outcome type.

/// Outcome of validating a ticket draft.
///
/// Mirrors the shape handed back to the intake flow: a draft is valid
/// exactly when nothing produced a warning; suggestions are advisory
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    /// Builds a report, deriving validity from the warning list.
    pub fn from_findings(warnings: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: warnings.is_empty(),
            warnings,
            suggestions,
        }
    }

    /// A report with no findings.
    pub fn clean() -> Self {
        Self::from_findings(Vec::new(), Vec::new())
    }
}
