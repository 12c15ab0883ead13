use meditrack_core::models::Exam;
use serde::Serialize;
use tracing::instrument;

use super::PageState;
use crate::client::ApiClient;

/// Today's exams.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    pub exams: Vec<Exam>,
}

impl Schedule {
    pub fn count(&self) -> usize {
        self.exams.len()
    }

    pub fn with_contrast(&self) -> usize {
        self.exams.iter().filter(|e| e.has_contrast).count()
    }
}

#[derive(Debug, Clone)]
pub struct SchedulePage {
    client: ApiClient,
}

impl SchedulePage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// A failed fetch shows an empty schedule.
    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Schedule> {
        let result = self.client.exams_today().await.map(|exams| Schedule { exams });
        PageState::or_empty(result, "today's schedule")
    }
}
