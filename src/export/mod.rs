//! Export module for the contact book
//!
//! Provides export of all contacts in multiple formats:
//! - CSV: spreadsheet-compatible
//! - JSON: machine-readable, with schema version and metadata
//! - YAML: human-readable backup

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use json::{export_contacts_json, import_from_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_contacts_yaml, import_from_yaml};
