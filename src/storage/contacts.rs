//! Contact repository for JSON storage
//!
//! Manages loading and saving contacts to contacts.json. The file holds a
//! bare JSON list of contact records; in memory they live in a
//! [`ContactTree`] guarded by a single lock.

use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::ContactError;
use crate::models::Contact;

use super::file_io::{read_json, write_json_atomic};
use super::tree::ContactTree;

/// Repository for contact persistence
pub struct ContactRepository {
    path: PathBuf,
    tree: RwLock<ContactTree>,
}

impl ContactRepository {
    /// Create a new, empty contact repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            tree: RwLock::new(ContactTree::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ContactTree>, ContactError> {
        self.tree
            .read()
            .map_err(|e| ContactError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ContactTree>, ContactError> {
        self.tree
            .write()
            .map_err(|e| ContactError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load contacts from disk, returning how many were loaded
    ///
    /// A missing file yields an empty book. The whole file is parsed before
    /// anything changes: on a read or parse failure the in-memory contacts
    /// are left as they were.
    pub fn load(&self) -> Result<usize, ContactError> {
        let records: Vec<Contact> = read_json(&self.path)?;
        let rebuilt: ContactTree = records.into_iter().collect();
        let count = rebuilt.len();

        *self.write()? = rebuilt;

        debug!(path = %self.path.display(), count, "loaded contacts");
        Ok(count)
    }

    /// Save contacts to disk in name order
    pub fn save(&self) -> Result<(), ContactError> {
        let tree = self.read()?;
        let records: Vec<&Contact> = tree.iter().collect();
        write_json_atomic(&self.path, &records)?;

        debug!(path = %self.path.display(), count = records.len(), "saved contacts");
        Ok(())
    }

    /// Insert a contact (no uniqueness check)
    pub fn insert(&self, contact: Contact) -> Result<(), ContactError> {
        self.write()?.insert(contact);
        Ok(())
    }

    /// Insert a contact unless one with the same name exists
    ///
    /// The check and the insert happen under one write lock. Returns whether
    /// the contact was inserted.
    pub fn insert_unique(&self, contact: Contact) -> Result<bool, ContactError> {
        let mut tree = self.write()?;
        if tree.contains(&contact.name) {
            return Ok(false);
        }
        tree.insert(contact);
        Ok(true)
    }

    /// Get a contact by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Contact>, ContactError> {
        Ok(self.read()?.find(name).cloned())
    }

    /// Remove a contact by name, returning it
    pub fn remove(&self, name: &str) -> Result<Option<Contact>, ContactError> {
        Ok(self.write()?.remove(name))
    }

    /// Get all contacts in name order
    pub fn get_all(&self) -> Result<Vec<Contact>, ContactError> {
        Ok(self.read()?.iter().cloned().collect())
    }

    /// Count contacts
    pub fn count(&self) -> Result<usize, ContactError> {
        Ok(self.read()?.len())
    }
}
