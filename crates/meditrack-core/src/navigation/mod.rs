//! Role-filtered navigation.
//!
//! Both the top navbar and the sidebar are a static link table run through
//! [`visible_links`] on every render. Nothing is cached, so a role change
//! shows up on the very next call.

use crate::locale;
use crate::models::{Role, Session};
use crate::routes::Route;

/// Who may see a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAccess {
    /// Everyone, logged in or not
    All,
    /// Only visitors with no session
    Anonymous,
    /// Only sessions holding one of these roles
    Roles(&'static [Role]),
}

impl LinkAccess {
    pub fn allows(&self, session: Option<&Session>) -> bool {
        match self {
            LinkAccess::All => true,
            LinkAccess::Anonymous => session.is_none(),
            LinkAccess::Roles(roles) => session.is_some_and(|s| roles.contains(&s.role)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub access: LinkAccess,
}

/// A link as rendered: visible, possibly the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub link: NavLink,
    pub active: bool,
}

/// Links the session may see, in table order, with the one whose path
/// equals `current_path` exactly marked active.
pub fn visible_links(
    table: &[NavLink],
    session: Option<&Session>,
    current_path: &str,
) -> Vec<NavEntry> {
    table
        .iter()
        .filter(|link| link.access.allows(session))
        .map(|link| NavEntry {
            link: link.clone(),
            active: link.route.path() == current_path,
        })
        .collect()
}

/// Top navbar.
pub fn navbar_links() -> Vec<NavLink> {
    vec![
        NavLink {
            route: Route::Home,
            label: locale::LABEL_HOME,
            access: LinkAccess::All,
        },
        NavLink {
            route: Route::AddPatient,
            label: locale::LABEL_ADD_PATIENT,
            access: LinkAccess::Roles(&[Role::Reception, Role::Admin]),
        },
        NavLink {
            route: Route::ViewRecords,
            label: locale::LABEL_VIEW_RECORDS,
            access: LinkAccess::Roles(&[Role::Reception, Role::Technician, Role::Admin]),
        },
        NavLink {
            route: Route::BonusCalculator,
            label: locale::LABEL_BONUS,
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::Login,
            label: locale::LABEL_LOGIN,
            access: LinkAccess::Anonymous,
        },
    ]
}

/// Sidebar shown to logged-in staff.
pub fn sidebar_links() -> Vec<NavLink> {
    vec![
        NavLink {
            route: Route::ReceptionAddRecord,
            label: "Registration",
            access: LinkAccess::Roles(&[Role::Reception, Role::Admin]),
        },
        NavLink {
            route: Route::ReceptionSchedule,
            label: "Today's Schedule",
            access: LinkAccess::Roles(&[Role::Reception, Role::Admin]),
        },
        NavLink {
            route: Route::TechnicianDashboard,
            label: "Exam Queue",
            access: LinkAccess::Roles(&[Role::Technician, Role::Admin]),
        },
        NavLink {
            route: Route::TechnicianReports,
            label: "Reports",
            access: LinkAccess::Roles(&[Role::Technician, Role::Admin]),
        },
        NavLink {
            route: Route::Admin,
            label: "Admin Panel",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::AdminUsers,
            label: "Users",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::AdminDoctors,
            label: "Doctors",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::AdminFinancials,
            label: "Financials",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::AdminBonusReport,
            label: "Bonus Report",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
        NavLink {
            route: Route::AdminAuditLogs,
            label: "Audit Logs",
            access: LinkAccess::Roles(&[Role::Admin]),
        },
    ]
}
