//! Technician forms: legacy record update, exam completion and reports.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{optional_text, Validate, ValidationErrors};
use crate::models::{ExamCompletion, ExamReport, ExamStatus, RecordUpdate, ReportStatus};

/// Result states offered by the legacy update form.
pub const RESULT_STATUSES: &[&str] = &["Pending", "In Progress", "Completed"];

/// Scan quality grades.
pub const SCAN_QUALITIES: &[&str] = &["Good", "Fair", "Poor"];

/// Formats accepted for scan timestamps (datetime-local first).
const SCAN_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn parse_scan_time(value: &str) -> Option<NaiveDateTime> {
    SCAN_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value.trim(), fmt).ok())
}

/// Legacy technician update of an imported record.
///
/// The national id arrives through the page's query string; without it
/// the form cannot be submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordUpdateForm {
    pub national_id: Option<String>,
    pub clinical_notes: String,
    pub technician_name: String,
    pub scan_quality: String,
    pub image_release_date: String,
    pub result_status: String,
    pub radiologist_name: String,
}

impl RecordUpdateForm {
    pub fn for_patient(national_id: impl Into<String>) -> Self {
        Self {
            national_id: Some(national_id.into()),
            result_status: RESULT_STATUSES[0].to_string(),
            ..Default::default()
        }
    }

    /// Payload for submission; `None` when there is no patient id.
    pub fn update(&self) -> Option<RecordUpdate> {
        let national_id = optional_text(&self.national_id)?;
        Some(RecordUpdate {
            national_id,
            clinical_notes: self.clinical_notes.clone(),
            technician_name: self.technician_name.trim().to_string(),
            scan_quality: self.scan_quality.clone(),
            image_release_date: self.image_release_date.clone(),
            result_status: self.result_status.clone(),
            radiologist_name: self.radiologist_name.trim().to_string(),
        })
    }
}

impl Validate for RecordUpdateForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if optional_text(&self.national_id).is_none() {
            errors.add("national_id", "Patient ID not provided");
        }
        if !self.result_status.is_empty() && !RESULT_STATUSES.contains(&self.result_status.as_str())
        {
            errors.add("result_status", "Unknown result status");
        }
        errors.into_result()
    }
}

/// Marks a pending exam as scanned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExamCompletionForm {
    pub exam_id: String,
    pub assigned_tech: String,
    pub mri_machine_id: Option<String>,
    pub scan_start: Option<String>,
    pub scan_end: Option<String>,
    pub referring_doctor_id: Option<i64>,
    pub reporting_doctor_id: Option<i64>,
    pub status: ExamStatus,
}

impl ExamCompletionForm {
    pub fn for_exam(exam_id: impl Into<String>) -> Self {
        Self {
            exam_id: exam_id.into(),
            status: ExamStatus::Completed,
            ..Default::default()
        }
    }

    pub fn completion(&self) -> ExamCompletion {
        ExamCompletion {
            exam_id: self.exam_id.clone(),
            assigned_tech: self.assigned_tech.trim().to_string(),
            mri_machine_id: optional_text(&self.mri_machine_id),
            scan_start: optional_text(&self.scan_start),
            scan_end: optional_text(&self.scan_end),
            referring_doctor_id: self.referring_doctor_id,
            reporting_doctor_id: self.reporting_doctor_id,
            status: self.status,
        }
    }
}

impl Validate for ExamCompletionForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("exam_id", &self.exam_id, "No exam selected");
        errors.require("assigned_tech", &self.assigned_tech, "Technician is required");

        let start = optional_text(&self.scan_start);
        let end = optional_text(&self.scan_end);
        let parsed_start = start.as_deref().map(parse_scan_time);
        let parsed_end = end.as_deref().map(parse_scan_time);
        if let Some(None) = parsed_start {
            errors.add("scan_start", "Invalid scan start time");
        }
        if let Some(None) = parsed_end {
            errors.add("scan_end", "Invalid scan end time");
        }
        if let (Some(Some(start)), Some(Some(end))) = (parsed_start, parsed_end) {
            if end < start {
                errors.add("scan_end", "Scan end is before scan start");
            }
        }
        errors.into_result()
    }
}

/// Report fields for a completed exam.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportForm {
    pub exam_id: String,
    pub report_status: ReportStatus,
    pub internal_notes: Option<String>,
    pub file_url: Option<String>,
    pub radiologist_name: Option<String>,
    pub radiologist_license: Option<String>,
}

impl ReportForm {
    /// Prefill from an exam in the report queue.
    pub fn from_exam(exam: &crate::models::Exam) -> Self {
        Self {
            exam_id: exam.id.clone(),
            report_status: exam.report_status.unwrap_or_default(),
            internal_notes: exam.internal_notes.clone(),
            file_url: exam.file_url.clone(),
            radiologist_name: exam.radiologist_name.clone(),
            radiologist_license: exam.radiologist_license.clone(),
        }
    }

    pub fn report(&self) -> ExamReport {
        ExamReport {
            exam_id: self.exam_id.clone(),
            report_status: self.report_status,
            internal_notes: optional_text(&self.internal_notes),
            file_url: optional_text(&self.file_url),
            radiologist_name: optional_text(&self.radiologist_name),
            radiologist_license: optional_text(&self.radiologist_license),
        }
    }
}

impl Validate for ReportForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("exam_id", &self.exam_id, "No exam selected");
        // A final report must name who signed it
        if self.report_status == ReportStatus::Final && optional_text(&self.radiologist_name).is_none() {
            errors.add("radiologist_name", "Radiologist is required for a final report");
        }
        errors.into_result()
    }
}
