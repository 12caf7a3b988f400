//! Contact service
//!
//! Business logic for the contact book: field clean-up and validation,
//! name uniqueness on add, and persisting plus auditing every change.

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::storage::Storage;

/// Input for adding a contact
#[derive(Debug, Clone, Default)]
pub struct AddContactInput {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub category: Option<String>,
}

impl AddContactInput {
    /// Input with just the required fields
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of contacts added
    pub added: usize,
    /// Names skipped because a contact with that name already exists
    pub skipped: Vec<String>,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
    default_category: String,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            default_category: settings.default_category.clone(),
        }
    }

    /// Add a new contact
    ///
    /// Rejects a name that already exists, compared case-insensitively. The
    /// book is saved immediately; if saving fails the contact is taken back
    /// out so memory and disk stay in step.
    pub fn add(&self, input: AddContactInput) -> ContactResult<Contact> {
        let category = input
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_category.clone());

        let contact = Contact::new(input.name.trim(), input.phone.trim())
            .with_email(input.email.as_deref().unwrap_or_default().trim())
            .with_category(category);

        contact
            .validate()
            .map_err(|e| ContactError::Validation(e.to_string()))?;

        if !self.storage.contacts.insert_unique(contact.clone())? {
            return Err(ContactError::duplicate_contact(&contact.name));
        }

        if let Err(e) = self.storage.contacts.save() {
            self.storage.contacts.remove(&contact.name)?;
            return Err(e);
        }

        self.audit_create(&contact);
        info!(name = %contact.name, "contact added");

        Ok(contact)
    }

    /// Add contacts read from an export, keeping their `date_added`
    ///
    /// Every record is validated before anything is inserted. Names already
    /// in the book are skipped. The book is saved once at the end; if that
    /// fails, none of the imported contacts are kept.
    pub fn import(&self, contacts: Vec<Contact>) -> ContactResult<ImportSummary> {
        for (index, contact) in contacts.iter().enumerate() {
            contact.validate().map_err(|e| {
                ContactError::Import(format!("Contact {} is invalid: {}", index + 1, e))
            })?;
        }

        let mut added = Vec::new();
        let mut summary = ImportSummary::default();
        for contact in contacts {
            if self.storage.contacts.insert_unique(contact.clone())? {
                added.push(contact);
            } else {
                summary.skipped.push(contact.name);
            }
        }

        if let Err(e) = self.storage.contacts.save() {
            for contact in &added {
                self.storage.contacts.remove(&contact.name)?;
            }
            return Err(e);
        }

        for contact in &added {
            self.audit_create(contact);
        }
        summary.added = added.len();
        info!(
            added = summary.added,
            skipped = summary.skipped.len(),
            "contacts imported"
        );

        Ok(summary)
    }

    /// Find a contact by name (case-insensitive)
    pub fn find(&self, name: &str) -> ContactResult<Option<Contact>> {
        self.storage.contacts.get_by_name(name.trim())
    }

    /// Delete a contact by name, returning it if one was removed
    ///
    /// If saving fails the contact is put back.
    pub fn delete(&self, name: &str) -> ContactResult<Option<Contact>> {
        let Some(removed) = self.storage.contacts.remove(name.trim())? else {
            return Ok(None);
        };

        if let Err(e) = self.storage.contacts.save() {
            self.storage.contacts.insert(removed)?;
            return Err(e);
        }

        if let Err(e) = self.storage.log_delete(&removed) {
            warn!(name = %removed.name, error = %e, "failed to write audit entry");
        }
        info!(name = %removed.name, "contact deleted");

        Ok(Some(removed))
    }

    /// All contacts in name order
    pub fn list(&self) -> ContactResult<Vec<Contact>> {
        self.storage.contacts.get_all()
    }

    /// Number of contacts
    pub fn count(&self) -> ContactResult<usize> {
        self.storage.contacts.count()
    }

    fn audit_create(&self, contact: &Contact) {
        if let Err(e) = self.storage.log_create(contact) {
            warn!(name = %contact.name, error = %e, "failed to write audit entry");
        }
    }

    /// Reload the book from disk
    ///
    /// On failure the current contacts are kept and the error is returned.
    pub fn reload(&self) -> ContactResult<usize> {
        self.storage.load_all().inspect_err(|e| {
            warn!(
                path = %self.storage.contacts.path().display(),
                error = %e,
                "failed to load contacts"
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::audit::Operation;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_contact() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        let contact = service
            .add(AddContactInput {
                name: "  John Smith ".into(),
                phone: "555-0100".into(),
                email: Some("john@example.com".into()),
                category: Some("work".into()),
            })
            .unwrap();

        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.category, "work");
        assert_eq!(service.count().unwrap(), 1);
        assert!(storage.contacts.path().exists());
    }

    #[test]
    fn test_add_uses_default_category() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            default_category: "friends".into(),
            ..Settings::default()
        };
        let service = ContactService::new(&storage, &settings);

        let mut input = AddContactInput::new("Ann", "1");
        input.category = Some("   ".into());
        let contact = service.add(input).unwrap();

        assert_eq!(contact.category, "friends");
    }

    #[test]
    fn test_add_rejects_duplicate_name_any_case() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        service.add(AddContactInput::new("John Smith", "1")).unwrap();
        let err = service
            .add(AddContactInput::new("JOHN SMITH", "2"))
            .unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(service.find("john smith").unwrap().unwrap().phone, "1");
    }

    #[test]
    fn test_add_validates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        let err = service.add(AddContactInput::new("", "1")).unwrap_err();
        assert!(err.is_validation());

        let err = service.add(AddContactInput::new("Ann", "  ")).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_contact() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        for name in ["John Smith", "Alice Johnson", "Bob Wilson"] {
            service.add(AddContactInput::new(name, "555")).unwrap();
        }

        let removed = service.delete("alice johnson").unwrap().unwrap();
        assert_eq!(removed.name, "Alice Johnson");
        assert!(service.find("ALICE JOHNSON").unwrap().is_none());

        let names: Vec<_> = service.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Bob Wilson", "John Smith"]);
    }

    #[test]
    fn test_delete_missing_is_none() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());
        service.add(AddContactInput::new("Ann", "1")).unwrap();

        assert!(service.delete("Nobody").unwrap().is_none());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_changes_are_persisted_and_audited() {
        let (temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        service.add(AddContactInput::new("Ann", "1")).unwrap();
        service.add(AddContactInput::new("Ben", "2")).unwrap();
        service.delete("ann").unwrap();

        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let fresh = Storage::new(paths).unwrap();
        assert_eq!(fresh.load_all().unwrap(), 1);
        assert!(fresh.contacts.get_by_name("ben").unwrap().is_some());

        let entries = storage.audit().unwrap().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Create, Operation::Delete]);
    }

    #[test]
    fn test_reload_failure_keeps_contacts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());
        service.add(AddContactInput::new("Ann", "1")).unwrap();

        std::fs::write(storage.contacts.path(), "[oops").unwrap();

        assert!(service.reload().is_err());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_audit_failure_does_not_fail_change() {
        let (temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());
        // A directory where the log file should be makes every append fail
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(paths.audit_log()).unwrap();

        let contact = service.add(AddContactInput::new("Ann", "1")).unwrap();
        assert_eq!(contact.name, "Ann");
        assert!(service.delete("ann").unwrap().is_some());

        let fresh = Storage::new(paths).unwrap();
        assert_eq!(fresh.load_all().unwrap(), 0);
    }

    #[test]
    fn test_import_skips_existing_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());
        service.add(AddContactInput::new("Ann", "1")).unwrap();

        let added = chrono::NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let summary = service
            .import(vec![
                Contact::new("ANN", "9"),
                Contact::new("Ben", "2").with_date_added(added),
                Contact::new("ben", "3"),
            ])
            .unwrap();

        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, vec!["ANN".to_string(), "ben".to_string()]);
        assert_eq!(service.find("ann").unwrap().unwrap().phone, "1");

        let ben = service.find("ben").unwrap().unwrap();
        assert_eq!(ben.phone, "2");
        assert_eq!(ben.date_added, added);

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_import_invalid_record_adds_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ContactService::new(&storage, &Settings::default());

        let err = service
            .import(vec![Contact::new("Ann", "1"), Contact::new("Ben", "")])
            .unwrap_err();

        assert!(matches!(err, ContactError::Import(_)));
        assert!(err.to_string().contains("Contact 2"));
        assert_eq!(service.count().unwrap(), 0);
    }
}
