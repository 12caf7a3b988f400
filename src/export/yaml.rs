//! YAML Export functionality
//!
//! Exports the contact book to YAML for a human-readable backup.

use crate::error::{ContactError, ContactResult};
use crate::export::json::ContactExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the contact book to YAML format
pub fn export_contacts_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ContactResult<()> {
    let export = ContactExport::from_storage(storage)?;

    let header = format!(
        "# Contact Book Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ContactError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ContactResult<ContactExport> {
    let export: ContactExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ContactError::Import(e.to_string()))?;

    export.validate().map_err(ContactError::Import)?;

    Ok(export)
}
