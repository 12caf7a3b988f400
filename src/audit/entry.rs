//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on a contact together with the record as it was
/// before (deletes) or after (creates) the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Lowercase name of the affected contact
    pub entity_id: String,

    /// Name of the contact as entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the contact before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the contact after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for an added contact
    pub fn create(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_id: contact.sort_key(),
            entity_name: Some(contact.name.clone()),
            before: None,
            after: serde_json::to_value(contact).ok(),
        }
    }

    /// Create a new audit entry for a deleted contact
    pub fn delete(contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_id: contact.sort_key(),
            entity_name: Some(contact.name.clone()),
            before: serde_json::to_value(contact).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Contact {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let contact = Contact::new("John Smith", "555-0100");
        let entry = AuditEntry::create(&contact);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_id, "john smith");
        assert_eq!(entry.entity_name.as_deref(), Some("John Smith"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["phone"], "555-0100");
    }

    #[test]
    fn test_delete_entry() {
        let contact = Contact::new("John Smith", "555-0100");
        let entry = AuditEntry::delete(&contact);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::delete(&Contact::new("Bob Wilson", "1"));
        let text = entry.format_human_readable();

        assert!(text.contains("DELETE Contact bob wilson (Bob Wilson)"));
        assert!(text.ends_with("(Bob Wilson)"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(&Contact::new("Ann", "1"));
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains(r#""operation":"create""#));
        assert!(!json.contains("before"));
    }
}
