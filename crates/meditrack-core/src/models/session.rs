//! Session model.

use serde::{Deserialize, Serialize};

use super::Role;

/// Username shown when the persisted session carries no name.
pub const PLACEHOLDER_USERNAME: &str = "User";

/// The currently authenticated staff member.
///
/// Both fields are always set together; an absent session is modelled as
/// `Option<Session>::None`, never as a session with an empty role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}
