//! Pre-submission draft validation.
//!
//! Pure structural checks run before a ticket is created: location
//! designators must carry recognizable numbers, ports must be numeric,
//! and requested parts are looked up in a static catalog that knows
//! canonical names, free-text aliases, and current substitutions for
//! exhausted stock.
//!
//! Findings are reported as data — validation never fails and never does
//! I/O. Missing required fields are the intake accumulator's concern, not
//! this module's: a rule here only fires on a value that is present but
//! suspect.

mod report;
mod rules;

pub use report::ValidationReport;
pub use rules::evaluate;
