//! Storage layer for the contact book
//!
//! Holds contacts in a name-ordered tree and persists them as JSON with
//! atomic writes and automatic directory creation.

pub mod contacts;
pub mod file_io;
pub mod tree;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};
pub use tree::ContactTree;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::Contact;

/// Main storage coordinator for contacts and the audit log
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ContactPaths) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging off
    pub fn without_audit(mut self) -> Self {
        self.audit = None;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk, returning the number of contacts
    pub fn load_all(&self) -> Result<usize, ContactError> {
        self.contacts.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ContactError> {
        self.contacts.save()
    }

    /// Record an added contact in the audit log
    pub fn log_create(&self, contact: &Contact) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(contact)),
            None => Ok(()),
        }
    }

    /// Record a deleted contact in the audit log
    pub fn log_delete(&self, contact: &Contact) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(contact)),
            None => Ok(()),
        }
    }
}
