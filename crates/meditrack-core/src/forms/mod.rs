//! Client-side form validation.
//!
//! Every form validates before anything is sent; a form that fails
//! validation never reaches the network.

mod admin;
mod intake;
mod login;
mod registration;
mod technician;

pub use admin::*;
pub use intake::*;
pub use login::*;
pub use registration::*;
pub use technician::*;

use std::fmt;

use thiserror::Error;

/// One invalid field and the message shown beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors of one submission.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record `message` against `field` when `value` is blank.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    /// Like [`Self::require`] for optional inputs.
    pub fn require_some<T>(&mut self, field: &'static str, value: &Option<T>, message: &str) {
        if value.is_none() {
            self.add(field, message);
        }
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// A form that can check itself before submission.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Trimmed value, or `None` when blank.
pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_flags_blank_values() {
        let mut errors = ValidationErrors::new();
        errors.require("name", "   ", "Name is required");
        errors.require("phone", "9911", "Phone is required");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(!errors.has("phone"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(&Some("  x ".into())), Some("x".into()));
        assert_eq!(optional_text(&Some("   ".into())), None);
        assert_eq!(optional_text(&None), None);
    }
}
