//! Contact Book - terminal contact manager
//!
//! This library provides the core functionality of the contact book: a
//! name-ordered store of name/phone/email/category records, persisted to a
//! JSON file between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The contact record
//! - `storage`: Name-ordered contact tree and JSON file storage
//! - `services`: Business logic layer
//! - `audit`: Audit logging of additions and deletions
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export and JSON/YAML import
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{paths::ContactPaths, settings::Settings};
//! use contact_book::services::{AddContactInput, ContactService};
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let service = ContactService::new(&storage, &settings);
//! service.add(AddContactInput::new("John Smith", "555-0100"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactError, ContactResult};
