//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, uniqueness, persistence, and auditing.

pub mod contact;

pub use contact::{AddContactInput, ContactService, ImportSummary};
