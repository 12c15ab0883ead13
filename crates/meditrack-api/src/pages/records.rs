use meditrack_core::{locale, PatientRecord, RecordNormalizer};
use tracing::{debug, instrument};

use super::PageState;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// Record list shared by the records view and the technician dashboard.
#[derive(Debug, Clone)]
pub struct RecordsPage {
    client: ApiClient,
}

impl RecordsPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Vec<PatientRecord>> {
        PageState::from_result(self.fetch().await, locale::ERR_LOAD_RECORDS)
    }

    /// Records still waiting for a result.
    pub async fn load_pending(&self) -> PageState<Vec<PatientRecord>> {
        match self.load().await {
            PageState::Ready(records) => {
                PageState::Ready(records.into_iter().filter(|r| !r.is_result_out()).collect())
            }
            other => other,
        }
    }

    async fn fetch(&self) -> ApiResult<Vec<PatientRecord>> {
        let rows = self.client.list_records().await?;
        let records = RecordNormalizer::new().normalize_all(&rows);
        debug!(rows = rows.len(), records = records.len(), "Records normalized");
        Ok(records)
    }
}
