use meditrack_core::forms::{PatientIntakeForm, Validate};
use meditrack_core::{locale, Route};
use tracing::{info, instrument};

use super::Outcome;
use crate::client::ApiClient;

/// Legacy patient intake.
#[derive(Debug, Clone)]
pub struct PatientIntakePage {
    client: ApiClient,
}

impl PatientIntakePage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Submit the intake and go to the record list.
    #[instrument(skip(self, form), fields(source = form.source.as_str()))]
    pub async fn submit(&self, form: &PatientIntakeForm) -> Outcome {
        if let Err(errors) = form.validate() {
            return Outcome::invalid(errors);
        }
        match self.client.add_patient(form).await {
            Ok(_) => {
                info!("Patient added");
                Outcome::redirect(Route::ViewRecords)
            }
            Err(e) => Outcome::failed(&e, locale::ERR_ADD_PATIENT),
        }
    }
}
