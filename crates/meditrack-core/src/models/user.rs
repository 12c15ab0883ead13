//! Staff account models (admin user management).

use serde::{Deserialize, Serialize};

use super::Role;

/// A staff account as listed by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    #[serde(alias = "Username")]
    pub username: String,
    /// Raw role string; older backends send lowercase names
    #[serde(alias = "Role")]
    pub role: String,
}

impl UserAccount {
    /// Role mapped through the legacy table, if recognised.
    pub fn role(&self) -> Option<Role> {
        Role::from_external(&self.role)
    }
}

/// Payload for creating a staff account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}
