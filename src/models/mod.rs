//! Core data models for the contact book
//!
//! This module contains the contact record and its validation rules.

pub mod contact;

pub use contact::{
    Contact, ContactValidationError, DATE_ADDED_FORMAT, DEFAULT_CATEGORY, KNOWN_CATEGORIES,
};
