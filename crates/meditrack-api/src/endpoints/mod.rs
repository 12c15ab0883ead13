//! Typed endpoint calls.
//!
//! Each endpoint is a method on [`ApiClient`](crate::ApiClient). Where the
//! API has moved a route, the current path is tried first and the legacy
//! one only on a 404.

mod admin;
mod auth;
mod doctors;
mod exams;
mod patients;

pub use auth::LoginResponse;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiResult;

/// Route paths, relative to the base URL.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const LEGACY_LOGIN: &str = "/auth/login";
    pub const ADD_PATIENT: &str = "/add-patient";
    pub const PATIENTS: &str = "/patients";
    pub const PATIENT_BY_NATIONAL_ID: &str = "/patients/by-national-id";
    pub const RECORDS: &str = "/general/get-records";
    pub const LEGACY_RECORDS: &str = "/get-records";
    pub const UPDATE_RECORD: &str = "/technician/update-record";
    pub const REGISTER_EXAM: &str = "/exams/register";
    pub const EXAMS_TODAY: &str = "/exams/today";
    pub const EXAMS_PENDING: &str = "/exams/pending";
    pub const EXAM_REPORTS: &str = "/exams/reports";
    pub const COMPLETE_EXAM: &str = "/exams/complete";
    pub const EXAM_REPORT: &str = "/exams/report";
    pub const DOCTORS: &str = "/doctors";
    pub const USERS: &str = "/admin/users";
    pub const LEGACY_GET_USERS: &str = "/admin/get-users";
    pub const LEGACY_CREATE_USER: &str = "/admin/create-user";
    pub const LEGACY_DELETE_USER: &str = "/admin/delete-user";
    pub const BONUS_REPORT: &str = "/admin/bonus-report";
    pub const BONUS_HISTORY: &str = "/admin/bonus-history";
    pub const REVENUE_WEEK: &str = "/admin/revenue-week";
    pub const AUDIT_LOGS: &str = "/admin/audit-logs";
    pub const CALCULATE_BONUS: &str = "/admin/calculate-bonus";
    pub const LEGACY_CALCULATE_BONUS: &str = "/calculate-bonus";
}

/// Retry on the legacy route when the current one is missing.
async fn or_legacy<T, F, Fut>(result: ApiResult<T>, legacy_path: &str, legacy: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    match result {
        Err(e) if e.is_not_found() => {
            debug!(legacy_path, "Route not found, trying legacy route");
            legacy().await
        }
        other => other,
    }
}

/// Decode a listing. `null` and non-array bodies read as an empty list.
fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> ApiResult<Vec<T>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => {
            warn!(what, kind = json_kind(&other), "Expected a list, showing none");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
