//! Patient models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result-status values that mean "the report is out".
const RESULT_OUT_VALUES: &[&str] = &["Yes", "Тийм", "Completed", "Done"];

/// Canonical patient/exam record, normalized from an upstream row.
///
/// Upstream rows are keyed by spreadsheet headers that changed across
/// revisions; [`crate::normalize::RecordNormalizer`] maps every variant onto
/// these fields. Columns it does not recognise are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Scan or booking date
    pub date: Option<String>,
    /// Full name
    pub name: Option<String>,
    /// National registration number (natural key)
    pub national_id: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    /// Patient phone number
    pub phone: Option<String>,
    pub scan_type: Option<String>,
    pub contrast: Option<String>,
    pub clinical_info: Option<String>,
    /// Referral source ("Өөрөө", "Facebook", "Эмнэлэг", ...)
    pub referral_source: Option<String>,
    pub hospital: Option<String>,
    pub department: Option<String>,
    pub doctor: Option<String>,
    pub doctor_phone: Option<String>,
    pub technician: Option<String>,
    pub cd_status: Option<String>,
    /// Result/report status as entered upstream
    pub result_status: Option<String>,
    pub radiologist: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    /// Unrecognised columns, verbatim
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PatientRecord {
    /// Whether the result has been released.
    pub fn is_result_out(&self) -> bool {
        self.result_status
            .as_deref()
            .map(|s| RESULT_OUT_VALUES.contains(&s.trim()))
            .unwrap_or(false)
    }

    /// Status shown in listings; rows without one are pending.
    pub fn display_status(&self) -> &str {
        match self.result_status.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "Pending",
        }
    }

    /// Whether the status column reads as completed.
    pub fn is_completed(&self) -> bool {
        self.display_status() == "Completed"
    }
}

/// Payload for creating a patient (`POST /patients`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

/// Minimal reference returned by patient creation and lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRef {
    pub id: i64,
    #[serde(default)]
    pub national_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_out_truthiness() {
        let mut record = PatientRecord::default();
        assert!(!record.is_result_out());

        for value in ["Yes", "Тийм", "Completed", "Done"] {
            record.result_status = Some(value.into());
            assert!(record.is_result_out(), "{value} should count as out");
        }

        record.result_status = Some("Pending".into());
        assert!(!record.is_result_out());
    }

    #[test]
    fn test_display_status_defaults_to_pending() {
        let mut record = PatientRecord::default();
        assert_eq!(record.display_status(), "Pending");
        record.result_status = Some("  ".into());
        assert_eq!(record.display_status(), "Pending");
        record.result_status = Some("Completed".into());
        assert_eq!(record.display_status(), "Completed");
        assert!(record.is_completed());
    }
}
