//! Legacy patient intake form (`POST /add-patient`).
//!
//! The referral block (hospital, department, doctor, doctor phone) is only
//! shown, validated and submitted when the source is a hospital referral.

use serde::{Deserialize, Serialize};

use super::{Validate, ValidationErrors};
use crate::locale;

/// Where the patient heard about the clinic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ReferralSource {
    #[default]
    #[serde(rename = "Өөрөө")]
    SelfReferred,
    #[serde(rename = "Facebook")]
    Facebook,
    #[serde(rename = "Эмнэлэг")]
    Hospital,
}

impl ReferralSource {
    pub const ALL: [ReferralSource; 3] = [
        ReferralSource::SelfReferred,
        ReferralSource::Facebook,
        ReferralSource::Hospital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralSource::SelfReferred => "Өөрөө",
            ReferralSource::Facebook => "Facebook",
            ReferralSource::Hospital => "Эмнэлэг",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label.trim())
    }

    /// Whether the referral block must be filled in.
    pub fn requires_referral_details(&self) -> bool {
        matches!(self, ReferralSource::Hospital)
    }
}

/// Yes/no selects on the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum YesNo {
    #[serde(rename = "Тийм")]
    Yes,
    #[default]
    #[serde(rename = "Үгүй")]
    No,
}

/// Gender options on the intake form.
pub const GENDERS: &[&str] = &["Эр", "Эм"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientIntakeForm {
    pub name: String,
    /// National ID.
    pub id: String,
    pub age: Option<u32>,
    pub gender: String,
    pub patient_phone: String,
    pub clinical_info: String,
    pub scan_type: String,
    pub contrast: YesNo,
    pub technician: String,
    pub cd_status: YesNo,
    pub result_status: YesNo,
    pub source: ReferralSource,

    // Referral block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    /// Referring doctor's phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub notes: String,
}

impl PatientIntakeForm {
    /// The body to submit: the referral block is dropped unless visible.
    pub fn submission(&self) -> PatientIntakeForm {
        let mut body = self.clone();
        if self.source.requires_referral_details() {
            body.hospital = super::optional_text(&self.hospital);
            body.department = super::optional_text(&self.department);
            body.doctor = super::optional_text(&self.doctor);
            body.phone = super::optional_text(&self.phone);
        } else {
            body.hospital = None;
            body.department = None;
            body.doctor = None;
            body.phone = None;
        }
        body
    }
}

impl Validate for PatientIntakeForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, locale::REQ_NAME);
        errors.require("id", &self.id, locale::REQ_ID);
        errors.require_some("age", &self.age, locale::REQ_AGE);
        errors.require("gender", &self.gender, locale::REQ_GENDER);
        errors.require("scan_type", &self.scan_type, locale::REQ_SCAN_TYPE);

        if self.source.requires_referral_details() {
            let hospital = self.hospital.as_deref().unwrap_or_default();
            let doctor = self.doctor.as_deref().unwrap_or_default();
            errors.require("hospital", hospital, locale::REQ_HOSPITAL);
            errors.require("doctor", doctor, locale::REQ_DOCTOR);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PatientIntakeForm {
        PatientIntakeForm {
            name: "Болд".into(),
            id: "УБ99010101".into(),
            age: Some(34),
            gender: "Эр".into(),
            scan_type: "MRI Brain".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_self_referred_needs_no_referral_block() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let errors = PatientIntakeForm::default().validate().unwrap_err();
        for field in ["name", "id", "age", "gender", "scan_type"] {
            assert!(errors.has(field), "missing error for {field}");
        }
        assert!(!errors.has("hospital"));
    }

    #[test]
    fn test_hospital_referral_requires_hospital_and_doctor() {
        let mut form = filled();
        form.source = ReferralSource::Hospital;
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("hospital"), Some(locale::REQ_HOSPITAL));
        assert_eq!(errors.get("doctor"), Some(locale::REQ_DOCTOR));
        assert!(!errors.has("department"));

        form.hospital = Some("Улсын 1-р төв эмнэлэг".into());
        form.doctor = Some("Д. Сараа".into());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_submission_drops_hidden_referral_block() {
        let mut form = filled();
        form.hospital = Some("Stale".into());
        form.source = ReferralSource::Facebook;

        let body = serde_json::to_value(form.submission()).unwrap();
        assert!(body.get("hospital").is_none());
        assert_eq!(body["source"], "Facebook");
        assert_eq!(body["contrast"], "Үгүй");
    }

    #[test]
    fn test_referral_source_labels() {
        assert_eq!(ReferralSource::from_label("Эмнэлэг"), Some(ReferralSource::Hospital));
        assert_eq!(ReferralSource::from_label("TV"), None);
        assert_eq!(ReferralSource::default().as_str(), "Өөрөө");
    }
}
