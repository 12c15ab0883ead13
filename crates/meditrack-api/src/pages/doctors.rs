use meditrack_core::forms::{NewDoctorForm, Validate};
use meditrack_core::models::Doctor;
use tracing::{info, instrument};

use super::{Outcome, PageState};
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

const ERR_LOAD: &str = "Failed to load doctors";
const ERR_CREATE: &str = "Failed to add doctor";
const ERR_DELETE: &str = "Failed to remove doctor";

/// Referring and reporting doctors.
#[derive(Debug, Clone)]
pub struct DoctorsPage {
    client: ApiClient,
}

impl DoctorsPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Vec<Doctor>> {
        PageState::from_result(self.client.list_doctors().await, ERR_LOAD)
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: &NewDoctorForm) -> Outcome {
        match self.send_create(form).await {
            Ok(()) => Outcome::success("Doctor added"),
            Err(e) => Outcome::failed(&e, ERR_CREATE),
        }
    }

    async fn send_create(&self, form: &NewDoctorForm) -> ApiResult<()> {
        form.validate()?;
        let doctor = form
            .doctor()
            .ok_or_else(|| ApiError::Unexpected("validated doctor without role".into()))?;
        self.client.create_doctor(&doctor).await?;
        info!(name = %doctor.name, "Doctor added");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Outcome {
        match self.client.delete_doctor(id).await {
            Ok(_) => Outcome::success("Doctor removed"),
            Err(e) => Outcome::failed(&e, ERR_DELETE),
        }
    }
}
