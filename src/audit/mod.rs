//! Audit logging for the contact book
//!
//! Records every contact added or deleted in an append-only audit log.
//!
//! - `AuditEntry`: one log entry with timestamp, operation, the contact's
//!   key, and the record before or after the operation.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
