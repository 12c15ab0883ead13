use meditrack_core::forms::{ExamRegistrationForm, Validate};
use meditrack_core::models::NewPatient;
use tracing::{info, instrument};

use super::Outcome;
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

const REGISTERED: &str = "Patient and exam registered!";
const ERR_REGISTER: &str = "Error registering patient";

/// Reception registration: patient plus exam in one submission.
#[derive(Debug, Clone)]
pub struct RegistrationPage {
    client: ApiClient,
}

impl RegistrationPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register the patient (or reuse the existing one) and book the exam.
    ///
    /// On success the caller clears the form.
    #[instrument(skip(self, form), fields(national_id = %form.national_id, exam_type = %form.exam_type))]
    pub async fn submit(&self, form: &ExamRegistrationForm) -> Outcome {
        if let Err(errors) = form.validate() {
            return Outcome::invalid(errors);
        }
        match self.register(form).await {
            Ok(patient_id) => {
                info!(patient_id, "Exam registered");
                Outcome::success(REGISTERED)
            }
            Err(e) => Outcome::failed(&e, ERR_REGISTER),
        }
    }

    async fn register(&self, form: &ExamRegistrationForm) -> ApiResult<i64> {
        let patient_id = self.patient_id(&form.patient()).await?;
        self.client.register_exam(&form.exam(patient_id)).await?;
        Ok(patient_id)
    }

    /// Create the patient; a national id that already exists is looked up
    /// instead.
    async fn patient_id(&self, patient: &NewPatient) -> ApiResult<i64> {
        match self.client.create_patient(patient).await {
            Ok(created) => Ok(created.id),
            Err(ApiError::Conflict { .. }) => {
                info!(national_id = %patient.national_id, "Patient exists, reusing record");
                let existing = self
                    .client
                    .patient_by_national_id(&patient.national_id)
                    .await?;
                Ok(existing.id)
            }
            Err(e) => Err(e),
        }
    }
}
