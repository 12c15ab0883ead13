//! Page controllers.
//!
//! A page loads its data into a [`PageState`] and answers submissions with
//! an [`Outcome`]. Failures never escape as errors: they are logged and
//! turned into a failed state or an error [`Notice`].

mod audit_log;
mod bonus_calculator;
mod bonus_report;
mod dashboard;
mod doctors;
mod exam_queue;
mod financials;
mod intake;
mod login;
mod records;
mod registration;
mod report_queue;
mod schedule;
mod users;

pub use audit_log::AuditLogPage;
pub use bonus_calculator::BonusCalculatorPage;
pub use bonus_report::{BonusReportPage, BonusReportView};
pub use dashboard::{AdminDashboard, DashboardView};
pub use doctors::DoctorsPage;
pub use exam_queue::{ExamQueue, ExamQueuePage};
pub use financials::{FinancialsPage, FinancialsView};
pub use intake::PatientIntakePage;
pub use login::LoginPage;
pub use records::RecordsPage;
pub use registration::RegistrationPage;
pub use report_queue::ReportQueuePage;
pub use schedule::{Schedule, SchedulePage};
pub use users::UsersPage;

use meditrack_core::{Route, ValidationErrors};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::{ApiError, ApiResult};

/// Load state of a page's data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> PageState<T> {
    /// `Ready` on success, otherwise `Failed` with the server's message or
    /// `default`.
    pub fn from_result(result: ApiResult<T>, default: &str) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => {
                error!(error = %e, "Page load failed");
                PageState::Failed(e.user_message(default))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Default> PageState<T> {
    /// For views that show an empty list rather than an error.
    pub fn or_empty(result: ApiResult<T>, what: &str) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => {
                error!(error = %e, what, "Load failed, showing nothing");
                PageState::Ready(T::default())
            }
        }
    }
}

/// Transient message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Result of a form submission or other page action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    /// Where to navigate next, if anywhere.
    pub redirect: Option<Route>,
    /// Per-field validation messages; nothing was sent when non-empty.
    pub field_errors: ValidationErrors,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Success(message.into())),
            ..Default::default()
        }
    }

    pub fn redirect(route: Route) -> Self {
        Self {
            redirect: Some(route),
            ..Default::default()
        }
    }

    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            field_errors: errors,
            ..Default::default()
        }
    }

    /// Error outcome for a failed call. A rejected session also sends the
    /// user to the login page.
    pub fn failed(err: &ApiError, default: &str) -> Self {
        if let ApiError::Invalid(errors) = err {
            return Self::invalid(errors.clone());
        }
        error!(error = %err, "Action failed");
        Self {
            notice: Some(Notice::Error(err.user_message(default))),
            redirect: err.is_unauthorized().then_some(Route::Login),
            ..Default::default()
        }
    }

    pub fn with_redirect(mut self, route: Route) -> Self {
        self.redirect = Some(route);
        self
    }

    pub fn is_success(&self) -> bool {
        self.field_errors.is_empty() && !self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

/// Log a secondary fetch that failed without failing the page.
pub(crate) fn isolated<T: Default>(result: ApiResult<T>, what: &'static str) -> (T, Option<&'static str>) {
    match result {
        Ok(data) => (data, None),
        Err(e) => {
            warn!(error = %e, what, "Fetch failed, section left empty");
            (T::default(), Some(what))
        }
    }
}
