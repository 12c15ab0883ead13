//! Bonus and revenue models.
//!
//! All amounts arrive pre-aggregated from the API; the client only sums and
//! formats them (see [`crate::reports`]).

use serde::{Deserialize, Serialize};

/// Per-doctor referral bonus aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusRow {
    /// Numeric in the newer API, string in older reports
    pub doctor_id: serde_json::Value,
    pub doctor_name: String,
    #[serde(default)]
    pub hospital: String,
    pub exam_count: u64,
    pub total_bonus: f64,
}

/// Response of `GET /admin/bonus-report`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BonusReport {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub data: Vec<BonusRow>,
}

/// One row from the weekly bonus calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusResult {
    #[serde(rename = "Doctor")]
    pub doctor: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Bonus")]
    pub bonus: f64,
    #[serde(rename = "Patients", default)]
    pub patients: Vec<String>,
    #[serde(rename = "Period", default)]
    pub period: Option<String>,
}

/// One stored calculator run from `GET /admin/bonus-history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BonusHistoryEntry {
    #[serde(rename = "Date Calculated", default)]
    pub date_calculated: String,
    #[serde(rename = "Doctor", default)]
    pub doctor: String,
    #[serde(rename = "Count", default)]
    pub count: u64,
    #[serde(rename = "Bonus", default)]
    pub bonus: f64,
    /// Comma-joined patient names
    #[serde(rename = "Patients", default)]
    pub patients: String,
    #[serde(rename = "Period", default)]
    pub period: String,
}

/// One day of the weekly revenue series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    /// English day abbreviation (`Mon` ... `Sun`)
    pub label: String,
    pub total: f64,
}

/// Response of `GET /admin/revenue-week`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevenueWeek {
    #[serde(default)]
    pub series: Vec<RevenuePoint>,
    #[serde(default)]
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_row_uses_capitalized_keys() {
        let row: BonusResult = serde_json::from_str(
            r#"{"Doctor": "Dr. Bat", "Count": 2, "Bonus": 100000, "Patients": ["A", "B"], "Period": "2024-01-05 to 2024-01-12"}"#,
        )
        .unwrap();
        assert_eq!(row.doctor, "Dr. Bat");
        assert_eq!(row.count, 2);
        assert_eq!(row.patients.len(), 2);
    }

    #[test]
    fn test_bonus_report_accepts_string_or_numeric_ids() {
        let report: BonusReport = serde_json::from_str(
            r#"{"period": "week", "data": [
                {"doctor_id": 1, "doctor_name": "A", "hospital": "H1", "exam_count": 3, "total_bonus": 150000},
                {"doctor_id": "d-2", "doctor_name": "B", "exam_count": 1, "total_bonus": 50000}
            ]}"#,
        )
        .unwrap();
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[1].hospital, "");
    }
}
