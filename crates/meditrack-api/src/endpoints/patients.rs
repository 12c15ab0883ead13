use meditrack_core::forms::PatientIntakeForm;
use meditrack_core::models::{NewPatient, PatientRef, RecordUpdate};
use serde_json::Value;
use tracing::instrument;

use super::{decode_list, or_legacy, paths};
use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Legacy intake. Hidden referral fields are not sent.
    #[instrument(skip(self, form), fields(national_id = %form.id))]
    pub async fn add_patient(&self, form: &PatientIntakeForm) -> ApiResult<Value> {
        self.post(paths::ADD_PATIENT, &form.submission()).await
    }

    /// Create a patient. A 409 means the national id is taken.
    #[instrument(skip(self, patient), fields(national_id = %patient.national_id))]
    pub async fn create_patient(&self, patient: &NewPatient) -> ApiResult<PatientRef> {
        self.post(paths::PATIENTS, patient).await
    }

    #[instrument(skip(self))]
    pub async fn patient_by_national_id(&self, national_id: &str) -> ApiResult<PatientRef> {
        self.get_query(
            paths::PATIENT_BY_NATIONAL_ID,
            &[("national_id", national_id)],
        )
        .await
    }

    /// Raw record rows; header spellings vary, see `RecordNormalizer`.
    #[instrument(skip(self))]
    pub async fn list_records(&self) -> ApiResult<Vec<Value>> {
        let value = or_legacy(self.get(paths::RECORDS).await, paths::LEGACY_RECORDS, || {
            self.get(paths::LEGACY_RECORDS)
        })
        .await?;
        decode_list(value, "records")
    }

    #[instrument(skip(self, update), fields(national_id = %update.national_id))]
    pub async fn update_record(&self, update: &RecordUpdate) -> ApiResult<Value> {
        self.post(paths::UPDATE_RECORD, update).await
    }
}
