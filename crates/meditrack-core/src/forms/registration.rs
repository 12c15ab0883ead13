//! Reception exam registration: a new patient plus their first exam.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{optional_text, Validate, ValidationErrors};
use crate::models::{ExamRegistration, NewPatient};

pub const EXAM_TYPES: &[&str] = &[
    "MRI Brain",
    "MRI Spine",
    "MRI Knee",
    "MRI Abdomen",
    "CT Head",
    "CT Chest",
    "CT Abdomen",
    "X-Ray",
    "Ultrasound",
];
pub const PAYMENT_STATUSES: &[&str] = &["Paid", "Partial", "Unpaid"];
pub const PAYMENT_METHODS: &[&str] = &["Cash", "Card", "Transfer"];
pub const INFO_SOURCES: &[&str] = &["Referred", "Facebook", "Walk-in", "Instagram", "Other"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExamRegistrationForm {
    // Patient
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,

    // Exam
    pub exam_type: String,
    pub exam_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub has_contrast: bool,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub payment_status: Option<String>,
    pub payment_method: Option<String>,
    pub info_source: Option<String>,
}

impl ExamRegistrationForm {
    /// The patient half of the form.
    pub fn patient(&self) -> NewPatient {
        NewPatient {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            national_id: self.national_id.trim().to_string(),
            age: self.age,
            gender: optional_text(&self.gender),
            phone: self.phone.trim().to_string(),
            email: optional_text(&self.email),
            address: optional_text(&self.address),
            emergency_contact: optional_text(&self.emergency_contact),
        }
    }

    /// The exam half, bound to a created or recovered patient.
    pub fn exam(&self, patient_id: i64) -> ExamRegistration {
        ExamRegistration {
            patient_id,
            exam_type: self.exam_type.trim().to_string(),
            exam_date: self.exam_date,
            time_slot: optional_text(&self.time_slot),
            has_contrast: self.has_contrast,
            price: self.price,
            discount: self.discount,
            payment_status: optional_text(&self.payment_status),
            payment_method: optional_text(&self.payment_method),
            info_source: optional_text(&self.info_source),
        }
    }
}

impl Validate for ExamRegistrationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");
        errors.require("national_id", &self.national_id, "National ID is required");
        errors.require("phone", &self.phone, "Phone is required");
        errors.require("exam_type", &self.exam_type, "Exam type is required");

        for (field, amount) in [("price", self.price), ("discount", self.discount)] {
            if amount.is_some_and(|a| a < 0.0 || !a.is_finite()) {
                errors.add(field, "Must be a non-negative amount");
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ExamRegistrationForm {
        ExamRegistrationForm {
            first_name: " Bold ".into(),
            last_name: "Bat".into(),
            national_id: "UB99010101".into(),
            phone: "99112233".into(),
            exam_type: EXAM_TYPES[0].into(),
            email: Some("  ".into()),
            payment_status: Some("Paid".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let errors = ExamRegistrationForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.has("exam_type"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut form = filled();
        form.price = Some(-1.0);
        assert!(form.validate().unwrap_err().has("price"));
    }

    #[test]
    fn test_split_into_patient_and_exam() {
        let form = filled();
        let patient = form.patient();
        assert_eq!(patient.first_name, "Bold");
        assert_eq!(patient.email, None);

        let exam = form.exam(42);
        assert_eq!(exam.patient_id, 42);
        assert_eq!(exam.exam_type, "MRI Brain");
        assert_eq!(exam.payment_status.as_deref(), Some("Paid"));
    }
}
