use meditrack_core::models::BonusReport;
use meditrack_core::reports::{BonusSummary, RevenueChart};
use serde::Serialize;
use tracing::{info, instrument};

use super::isolated;
use crate::client::ApiClient;

/// Revenue and referral totals side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialsView {
    pub bonus: BonusReport,
    pub summary: BonusSummary,
    pub revenue: RevenueChart,
    pub failed: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct FinancialsPage {
    client: ApiClient,
}

impl FinancialsPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Both fetches run concurrently; one failing leaves the other intact.
    #[instrument(skip(self))]
    pub async fn load(&self) -> FinancialsView {
        let (bonus, revenue) = tokio::join!(self.client.bonus_report(), self.client.revenue_week());
        let (bonus, bonus_failed) = isolated(bonus, "bonus report");
        let (week, revenue_failed) = isolated(revenue, "revenue");

        let summary = BonusSummary::from_rows(&bonus.data);
        info!(
            total_exams = summary.total_exams,
            total_bonus = summary.total_bonus,
            total_revenue = week.total_revenue,
            "Financials loaded"
        );
        FinancialsView {
            bonus,
            summary,
            revenue: RevenueChart::from_week(&week),
            failed: [bonus_failed, revenue_failed].into_iter().flatten().collect(),
        }
    }
}
