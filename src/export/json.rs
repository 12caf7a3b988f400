//! JSON Export functionality
//!
//! Exports the whole contact book to JSON with schema versioning, and reads
//! such an export back for `contacts import`. Unlike
//! contacts.json, the export wraps the list with metadata.

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full contact book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All contacts in name order
    pub contacts: Vec<Contact>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of contacts
    pub contact_count: usize,

    /// Number of contacts per category
    pub categories: BTreeMap<String, usize>,
}

impl ContactExport {
    /// Create a new export from storage
    pub fn from_storage(storage: &Storage) -> ContactResult<Self> {
        let contacts = storage.contacts.get_all()?;

        let mut categories = BTreeMap::new();
        for contact in &contacts {
            *categories.entry(contact.category.clone()).or_insert(0) += 1;
        }

        let metadata = ExportMetadata {
            contact_count: contacts.len(),
            categories,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.contact_count != self.contacts.len() {
            return Err(format!(
                "Contact count mismatch: metadata says {}, found {}",
                self.metadata.contact_count,
                self.contacts.len()
            ));
        }

        if let Some(index) = self.contacts.iter().position(|c| c.name.trim().is_empty()) {
            return Err(format!("Contact {} has an empty name", index + 1));
        }

        Ok(())
    }
}

/// Export the contact book to JSON
pub fn export_contacts_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ContactResult<()> {
    let export = ContactExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> ContactResult<ContactExport> {
    let export: ContactExport =
        serde_json::from_str(json_str).map_err(|e| ContactError::Import(e.to_string()))?;

    export.validate().map_err(ContactError::Import)?;

    Ok(export)
}
