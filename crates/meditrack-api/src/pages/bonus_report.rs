use meditrack_core::models::BonusRow;
use meditrack_core::reports::BonusSummary;
use serde::Serialize;
use tracing::instrument;

use super::PageState;
use crate::client::ApiClient;

const ERR_LOAD: &str = "Failed to load bonus report";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BonusReportView {
    pub period: String,
    pub rows: Vec<BonusRow>,
    pub summary: BonusSummary,
}

/// Per-doctor referral bonuses for the current period.
#[derive(Debug, Clone)]
pub struct BonusReportPage {
    client: ApiClient,
}

impl BonusReportPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<BonusReportView> {
        let result = self.client.bonus_report().await.map(|report| BonusReportView {
            summary: BonusSummary::from_rows(&report.data),
            period: report.period,
            rows: report.data,
        });
        PageState::from_result(result, ERR_LOAD)
    }
}
