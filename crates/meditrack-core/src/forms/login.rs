//! Login form.

use serde::Serialize;

use super::{Validate, ValidationErrors};
use crate::locale;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username, locale::REQ_USERNAME);
        // Passwords are not trimmed; only a truly empty one is rejected
        if self.password.is_empty() {
            errors.add("password", locale::REQ_PASSWORD);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.has("username"));
        assert!(errors.has("password"));

        let form = LoginForm {
            username: "bat".into(),
            password: " ".into(),
        };
        assert!(form.validate().is_ok());
    }
}
