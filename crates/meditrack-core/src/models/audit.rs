//! Audit log entries.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the admin audit log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditLogEntry {
    pub user_id: String,
    /// INSERT, UPDATE or DELETE
    pub action: String,
    pub table: String,
    pub target_id: String,
    #[serde(default)]
    pub old: Option<String>,
    #[serde(default)]
    pub new: Option<String>,
    pub timestamp: String,
}

impl AuditLogEntry {
    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    ///
    /// Accepts RFC 3339 and the naive ISO form the backend emits; anything
    /// else is shown verbatim.
    pub fn display_timestamp(&self) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string();
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&self.timestamp, fmt) {
                return dt.format("%Y-%m-%d %H:%M:%S").to_string();
            }
        }
        self.timestamp.clone()
    }
}
