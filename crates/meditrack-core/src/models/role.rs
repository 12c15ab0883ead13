//! Staff roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Permission level of a logged-in staff member.
///
/// The canonical spelling is the capitalized one (`Reception`, `Technician`,
/// `Admin`). Older backends answer with lowercase names such as
/// `receptionist`; those are accepted only through [`Role::from_external`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Front desk: patient intake and scheduling
    Reception,
    /// Imaging technician: exam queue and reports
    Technician,
    /// Clinic administrator
    Admin,
}

/// Every external spelling a backend revision has used, mapped to one role.
const EXTERNAL_ROLE_NAMES: &[(&str, Role)] = &[
    ("reception", Role::Reception),
    ("receptionist", Role::Reception),
    ("front-desk", Role::Reception),
    ("technician", Role::Technician),
    ("tech", Role::Technician),
    ("admin", Role::Admin),
    ("administrator", Role::Admin),
];

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Reception, Role::Technician, Role::Admin];

    /// Map any known external role name (case-insensitive) to a role.
    pub fn from_external(name: &str) -> Option<Role> {
        let lower = name.trim().to_lowercase();
        EXTERNAL_ROLE_NAMES
            .iter()
            .find(|(external, _)| *external == lower)
            .map(|(_, role)| *role)
    }

    /// Canonical name, as persisted and sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reception => "Reception",
            Role::Technician => "Technician",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
