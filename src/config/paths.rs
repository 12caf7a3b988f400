//! Path management for the contact book
//!
//! Provides XDG-compliant path resolution for configuration, contact data,
//! and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contact-book` or `~/.config/contact-book`
//! 3. Windows: `%APPDATA%\contact-book`

use std::path::{Path, PathBuf};

use crate::error::ContactError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CONTACT_BOOK_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book data
    base_dir: PathBuf,

    /// Explicit contacts file, overriding `<base>/contacts.json`
    contacts_file: Option<PathBuf>,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self {
            base_dir,
            contacts_file: None,
        })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            contacts_file: None,
        }
    }

    /// Point the contacts file somewhere other than the base directory
    pub fn with_contacts_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.contacts_file = Some(path.into());
        self
    }

    /// Get the base directory (~/.config/contact-book/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.contacts_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join("contacts.json"))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ContactError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("contact-book"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contact-book"))
}
