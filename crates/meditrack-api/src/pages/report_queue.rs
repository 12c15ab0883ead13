use meditrack_core::forms::{ReportForm, Validate};
use meditrack_core::models::Exam;
use tracing::{info, instrument};

use super::{Outcome, PageState};
use crate::client::ApiClient;

const ERR_LOAD: &str = "Failed to load report queue";
const ERR_SAVE: &str = "Failed to update report";

/// Completed exams awaiting or holding a report.
#[derive(Debug, Clone)]
pub struct ReportQueuePage {
    client: ApiClient,
}

impl ReportQueuePage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Vec<Exam>> {
        PageState::from_result(self.client.exam_reports().await, ERR_LOAD)
    }

    /// Editor contents for the selected exam.
    pub fn select(&self, exam: &Exam) -> ReportForm {
        ReportForm::from_exam(exam)
    }

    #[instrument(skip(self, form), fields(exam_id = %form.exam_id, status = ?form.report_status))]
    pub async fn save(&self, form: &ReportForm) -> Outcome {
        if let Err(errors) = form.validate() {
            return Outcome::invalid(errors);
        }
        match self.client.update_report(&form.report()).await {
            Ok(_) => {
                info!("Report saved");
                Outcome::success("Report updated")
            }
            Err(e) => Outcome::failed(&e, ERR_SAVE),
        }
    }
}
