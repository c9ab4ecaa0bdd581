//! Work-order domain logic for data-center maintenance boards.
//!
//! Provides the pure pieces of a maintenance ticketing system:
//!
//! - **Ticket model** (`ticket`): board tickets with priority tiers,
//!   lifecycle states, and free-text locations.
//! - **Field parsing** (`parse`): tolerant, case-insensitive extraction
//!   of priority, pod, and rack numbers from human-written text.
//! - **Sequencing** (`sequence`): rank-rule composition engine producing
//!   a travel-efficient work-block order (priority tier → pod → rack)
//!   over the tickets that are ready for work.
//! - **Intake** (`intake`): turn-over-turn accumulation of extracted
//!   ticket fields into a draft, with completeness tracking and
//!   finalization into a board ticket.
//! - **Validation** (`validate`): pure pre-submission checks producing a
//!   warnings/suggestions report.
//! - **Priority** (`priority`): deterministic triage suggestion with
//!   justification and duration estimate.
//!
//! # Architecture
//!
//! Every operation is a synchronous, in-process pure function over plain
//! data: no network, no files, no persisted state, no background work.
//! Rendering, transport, and persistence belong to the callers; with the
//! `serde` feature the public types derive `Serialize`/`Deserialize` so
//! they can cross a JSON API boundary unchanged.

pub mod intake;
pub mod parse;
pub mod priority;
pub mod sequence;
pub mod ticket;
pub mod validate;
