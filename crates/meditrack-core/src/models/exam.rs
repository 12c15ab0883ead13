//! Exam models for the reception and technician workflows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a scheduled exam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExamStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
    Rescheduled,
}

/// Report state of a completed exam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Draft,
    Final,
}

/// An exam as returned by the `/exams/*` listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub exam_type: String,
    #[serde(default)]
    pub exam_date: Option<String>,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub has_contrast: bool,
    #[serde(default)]
    pub status: ExamStatus,

    // Completion metadata
    #[serde(default)]
    pub assigned_tech: Option<String>,
    #[serde(default)]
    pub mri_machine_id: Option<String>,
    #[serde(default)]
    pub scan_start: Option<String>,
    #[serde(default)]
    pub scan_end: Option<String>,

    // Report metadata
    #[serde(default)]
    pub report_status: Option<ReportStatus>,
    #[serde(default)]
    pub radiologist_name: Option<String>,
    #[serde(default)]
    pub radiologist_license: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
}

impl Exam {
    /// Whether this exam still waits for the technician.
    pub fn is_pending(&self) -> bool {
        self.status == ExamStatus::Pending
    }
}

/// Payload for `POST /exams/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExamRegistration {
    pub patient_id: i64,
    pub exam_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    pub has_contrast: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_source: Option<String>,
}

/// Payload for `PATCH /exams/complete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamCompletion {
    pub exam_id: String,
    pub assigned_tech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mri_machine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_doctor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_doctor_id: Option<i64>,
    pub status: ExamStatus,
}

/// Payload for `PATCH /exams/report`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamReport {
    pub exam_id: String,
    pub report_status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiologist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radiologist_license: Option<String>,
}

/// Payload for the legacy `POST /technician/update-record`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordUpdate {
    pub national_id: String,
    pub clinical_notes: String,
    pub technician_name: String,
    pub scan_quality: String,
    pub image_release_date: String,
    pub result_status: String,
    pub radiologist_name: String,
}
