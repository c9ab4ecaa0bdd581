//! Conversational ticket intake.
//!
//! The assistant extracts partial ticket fields turn over turn; the
//! [`TicketDraft`] accumulator merges each extraction into the running
//! draft without ever erasing previously captured values, tracks which
//! required fields are still missing, and finalizes a complete draft into
//! a board-ready [`Ticket`](crate::ticket::Ticket).
//!
//! Extraction itself (turning chat text into field values) happens
//! upstream; this module only owns what to do with the results.

mod draft;

pub use draft::{Action, IntakeError, TicketDraft, REQUIRED_FIELDS};
