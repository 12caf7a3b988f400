//! Contact model
//!
//! A contact is a small value record keyed by its name. Names are compared
//! case-insensitively: the lowercase form of the name is the ordering key.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "general";

/// Categories offered by the interactive prompt. Any other text is accepted.
pub const KNOWN_CATEGORIES: [&str; 4] = ["family", "friends", "work", "general"];

/// On-disk and display format of `date_added`
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, also the identity key (case-insensitive)
    pub name: String,

    /// Phone number, stored as entered
    pub phone: String,

    /// Email address (may be empty)
    #[serde(default)]
    pub email: String,

    /// Free-form category, conventionally one of [`KNOWN_CATEGORIES`]
    #[serde(default = "default_category")]
    pub category: String,

    /// When the contact was created
    #[serde(default = "now", with = "date_added_format")]
    pub date_added: NaiveDateTime,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    // The persisted form has whole-second precision
    now.with_nanosecond(0).unwrap_or(now)
}

impl Contact {
    /// Create a new contact in the default category, stamped with the current time
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
            category: default_category(),
            date_added: now(),
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Override the creation timestamp
    pub fn with_date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Normalize a name into its ordering key
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// The ordering key of this contact
    pub fn sort_key(&self) -> String {
        Self::normalize_name(&self.name)
    }

    /// `date_added` rendered with a strftime format
    ///
    /// Falls back to [`DATE_ADDED_FORMAT`] if `format` is not a valid
    /// strftime string.
    pub fn date_added_text(&self, format: &str) -> String {
        use std::fmt::Write as _;

        let mut text = String::new();
        if write!(text, "{}", self.date_added.format(format)).is_err() {
            text.clear();
            let _ = write!(text, "{}", self.date_added.format(DATE_ADDED_FORMAT));
        }
        text
    }

    /// Validate the required fields
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        if self.phone.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }

        Ok(())
    }
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyPhone,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::EmptyPhone => write!(f, "Phone number cannot be empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp text
mod date_added_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_ADDED_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(DATE_ADDED_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, DATE_ADDED_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_contact_defaults() {
        let contact = Contact::new("John Smith", "555-0100");
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.email, "");
        assert_eq!(contact.category, "general");
        assert_eq!(contact.date_added.nanosecond(), 0);
    }

    #[test]
    fn test_sort_key_is_lowercase() {
        let contact = Contact::new("Alice JOHNSON", "555-0101");
        assert_eq!(contact.sort_key(), "alice johnson");
        assert_eq!(contact.sort_key(), Contact::normalize_name("ALICE johnson"));
    }

    #[test]
    fn test_validate() {
        assert!(Contact::new("Bob", "555").validate().is_ok());
        assert_eq!(
            Contact::new("   ", "555").validate(),
            Err(ContactValidationError::EmptyName)
        );
        assert_eq!(
            Contact::new("Bob", "").validate(),
            Err(ContactValidationError::EmptyPhone)
        );
    }

    #[test]
    fn test_date_added_text() {
        let contact = Contact::new("Bob Wilson", "555-0102").with_date_added(fixed_time());

        assert_eq!(contact.date_added_text(DATE_ADDED_FORMAT), "2024-01-08 09:30:00");
        assert_eq!(contact.date_added_text("%d/%m/%Y"), "08/01/2024");
    }

    #[test]
    fn test_date_added_text_bad_format_falls_back() {
        let contact = Contact::new("Ann", "1").with_date_added(fixed_time());

        assert_eq!(contact.date_added_text("%Q"), "2024-01-08 09:30:00");
    }

    #[test]
    fn test_serialized_shape() {
        let contact = Contact::new("Bob Wilson", "555-0102").with_date_added(fixed_time());
        let value = serde_json::to_value(&contact).unwrap();

        assert_eq!(value["name"], "Bob Wilson");
        assert_eq!(value["email"], "");
        assert_eq!(value["category"], "general");
        assert_eq!(value["date_added"], "2024-01-08 09:30:00");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let contact: Contact =
            serde_json::from_str(r#"{"name": "Carol", "phone": "555-0103"}"#).unwrap();

        assert_eq!(contact.email, "");
        assert_eq!(contact.category, "general");
        // date_added is generated when absent
        let age = Local::now().naive_local() - contact.date_added;
        assert!(age.num_seconds() < 60);
    }

    #[test]
    fn test_deserialize_rejects_bad_timestamp() {
        let result = serde_json::from_str::<Contact>(
            r#"{"name": "Carol", "phone": "555", "date_added": "yesterday"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_requires_name_and_phone() {
        assert!(serde_json::from_str::<Contact>(r#"{"phone": "555"}"#).is_err());
        assert!(serde_json::from_str::<Contact>(r#"{"name": "Carol"}"#).is_err());
    }
}
