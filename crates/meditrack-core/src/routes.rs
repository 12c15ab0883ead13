//! Application routes.

use crate::models::Role;

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    AddPatient,
    ViewRecords,
    BonusCalculator,
    ReceptionAddRecord,
    ReceptionSchedule,
    TechnicianDashboard,
    TechnicianPending,
    TechnicianUpdateRecord,
    TechnicianReports,
    Admin,
    AdminUsers,
    AdminDoctors,
    AdminAuditLogs,
    AdminFinancials,
    AdminBonusReport,
}

const ROUTE_PATHS: &[(Route, &str)] = &[
    (Route::Home, "/"),
    (Route::Login, "/login"),
    (Route::AddPatient, "/add-patient"),
    (Route::ViewRecords, "/view-records"),
    (Route::BonusCalculator, "/bonus-calculator"),
    (Route::ReceptionAddRecord, "/reception/add-record"),
    (Route::ReceptionSchedule, "/reception/schedule"),
    (Route::TechnicianDashboard, "/technician/dashboard"),
    (Route::TechnicianPending, "/technician/pending"),
    (Route::TechnicianUpdateRecord, "/technician/update-record"),
    (Route::TechnicianReports, "/technician/reports"),
    (Route::Admin, "/admin"),
    (Route::AdminUsers, "/admin/users"),
    (Route::AdminDoctors, "/admin/doctors"),
    (Route::AdminAuditLogs, "/admin/audit-logs"),
    (Route::AdminFinancials, "/admin/financials"),
    (Route::AdminBonusReport, "/admin/bonus-report"),
];

impl Route {
    /// URL path of this route.
    pub fn path(&self) -> &'static str {
        ROUTE_PATHS
            .iter()
            .find(|(route, _)| route == self)
            .map(|(_, path)| *path)
            .unwrap_or("/")
    }

    /// Route for an exact path. Query strings are not stripped.
    pub fn from_path(path: &str) -> Option<Route> {
        ROUTE_PATHS
            .iter()
            .find(|(_, p)| *p == path)
            .map(|(route, _)| *route)
    }
}

/// Where a user lands right after logging in.
pub fn landing_route(role: Option<Role>) -> Route {
    match role {
        Some(Role::Reception) => Route::ReceptionAddRecord,
        Some(Role::Technician) => Route::TechnicianPending,
        Some(Role::Admin) => Route::Admin,
        None => Route::Home,
    }
}
