use meditrack_core::forms::{ExamCompletionForm, RecordUpdateForm, Validate};
use meditrack_core::models::{partition_doctors, DoctorLists, Exam};
use meditrack_core::Route;
use tracing::{info, instrument};

use super::{isolated, Outcome, PageState};
use crate::client::ApiClient;
use crate::error::ApiResult;

const ERR_LOAD_QUEUE: &str = "Failed to load exam queue";
const ERR_COMPLETE: &str = "Failed to complete exam";
const ERR_UPDATE: &str = "Update failed";

/// What the technician sees: pending exams and the doctors to assign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamQueue {
    pub pending: Vec<Exam>,
    pub doctors: DoctorLists,
}

#[derive(Debug, Clone)]
pub struct ExamQueuePage {
    client: ApiClient,
}

impl ExamQueuePage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Pending exams and doctors load side by side; without doctors the
    /// queue still shows, with empty pickers.
    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<ExamQueue> {
        let (pending, doctors) = tokio::join!(self.client.exams_pending(), self.client.list_doctors());
        let (doctors, _) = isolated(doctors, "doctors");
        PageState::from_result(
            pending.map(|pending| ExamQueue {
                pending,
                doctors: partition_doctors(&doctors),
            }),
            ERR_LOAD_QUEUE,
        )
    }

    /// Mark an exam as scanned; the caller reloads the queue on success.
    #[instrument(skip(self, form), fields(exam_id = %form.exam_id))]
    pub async fn complete(&self, form: &ExamCompletionForm) -> Outcome {
        if let Err(errors) = form.validate() {
            return Outcome::invalid(errors);
        }
        match self.client.complete_exam(&form.completion()).await {
            Ok(_) => {
                info!("Exam completed");
                Outcome::success("Exam marked as completed")
            }
            Err(e) => Outcome::failed(&e, ERR_COMPLETE),
        }
    }

    /// Legacy record update, back to the dashboard when done.
    #[instrument(skip(self, form))]
    pub async fn update_record(&self, form: &RecordUpdateForm) -> Outcome {
        match self.send_update(form).await {
            Ok(()) => Outcome::redirect(Route::TechnicianDashboard),
            Err(e) => Outcome::failed(&e, ERR_UPDATE),
        }
    }

    async fn send_update(&self, form: &RecordUpdateForm) -> ApiResult<()> {
        form.validate()?;
        if let Some(update) = form.update() {
            self.client.update_record(&update).await?;
            info!(national_id = %update.national_id, "Record updated");
        }
        Ok(())
    }
}
