//! CSV Export functionality
//!
//! Exports contacts to a spreadsheet-compatible CSV file.

use crate::error::{ContactError, ContactResult};
use crate::storage::Storage;
use std::io::Write;

/// Column headers of the CSV export
pub const CSV_HEADERS: [&str; 5] = ["Name", "Phone", "Email", "Category", "Date Added"];

/// Export all contacts to CSV in name order
pub fn export_contacts_csv<W: Write>(
    storage: &Storage,
    writer: &mut W,
    date_format: &str,
) -> ContactResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| ContactError::Export(e.to_string()))?;

    for contact in storage.contacts.get_all()? {
        let date_added = contact.date_added_text(date_format);
        csv_writer
            .write_record([
                contact.name.as_str(),
                contact.phone.as_str(),
                contact.email.as_str(),
                contact.category.as_str(),
                date_added.as_str(),
            ])
            .map_err(|e| ContactError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}
