//! Contact display formatting
//!
//! Formats contacts for terminal output as detail blocks and as a compact table.

use crate::models::Contact;

/// Format a single contact as a multi-line detail block
pub fn format_contact_details(contact: &Contact, date_format: &str) -> String {
    format!(
        "Name: {}\nPhone: {}\nEmail: {}\nCategory: {}\nAdded: {}\n",
        contact.name,
        contact.phone,
        contact.email,
        contact.category,
        contact.date_added_text(date_format)
    )
}

/// Format every contact as detail blocks under an alphabetical header
pub fn format_contact_list(contacts: &[Contact], date_format: &str) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut output = String::new();
    output.push_str("All Contacts (Alphabetical Order):\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for contact in contacts {
        output.push_str(&format_contact_details(contact, date_format));
        output.push('\n');
    }

    output
}

/// Format contacts as a compact table, one per line
pub fn format_contact_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let name_width = column_width(contacts.iter().map(|c| c.name.as_str()), "Name");
    let phone_width = column_width(contacts.iter().map(|c| c.phone.as_str()), "Phone");
    let email_width = column_width(contacts.iter().map(|c| c.email.as_str()), "Email");

    let mut output = String::new();
    output.push_str(&format!(
        "{:name_width$}  {:phone_width$}  {:email_width$}  {}\n",
        "Name", "Phone", "Email", "Category"
    ));
    output.push_str(&format!(
        "{}\n",
        "-".repeat(name_width + phone_width + email_width + 16)
    ));

    for contact in contacts {
        output.push_str(&format!(
            "{:name_width$}  {:phone_width$}  {:email_width$}  {}\n",
            contact.name, contact.phone, contact.email, contact.category
        ));
    }

    output.push_str(&format!("\nTotal: {} contacts\n", contacts.len()));
    output
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
