//! Admin forms: staff accounts and doctors.

use serde::{Deserialize, Serialize};

use super::{optional_text, Validate, ValidationErrors};
use crate::models::{DoctorRole, NewDoctor, NewUser, Role};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewUserForm {
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}

impl NewUserForm {
    /// The account to create, once validated.
    pub fn user(&self) -> Option<NewUser> {
        Some(NewUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            role: self.role?,
        })
    }
}

impl Validate for NewUserForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("username", &self.username, "Username is required");
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.require_some("role", &self.role, "Role is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewDoctorForm {
    pub name: String,
    pub hospital: Option<String>,
    pub phone: Option<String>,
    pub license_no: Option<String>,
    pub role: Option<DoctorRole>,
}

impl NewDoctorForm {
    pub fn doctor(&self) -> Option<NewDoctor> {
        Some(NewDoctor {
            name: self.name.trim().to_string(),
            hospital: optional_text(&self.hospital),
            phone: optional_text(&self.phone),
            license_no: optional_text(&self.license_no),
            role: self.role?,
        })
    }
}

impl Validate for NewDoctorForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require_some("role", &self.role, "Role is required");
        if self.role == Some(DoctorRole::Reporting) && optional_text(&self.license_no).is_none() {
            errors.add("license_no", "License number is required for reporting doctors");
        }
        errors.into_result()
    }
}
