use meditrack_core::models::BonusRow;
use meditrack_core::reports::{top_referrers, RevenueChart};
use serde::Serialize;
use tracing::{info, instrument};

use super::isolated;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::task::ViewScope;

/// How many referrers the dashboard lists.
pub const TOP_REFERRERS: usize = 5;

/// Admin overview. Each section is filled independently; a section whose
/// fetch failed stays empty and is named in `failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    pub today_count: usize,
    pub pending_count: usize,
    pub top_referrers: Vec<BonusRow>,
    pub revenue: RevenueChart,
    pub failed: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
    client: ApiClient,
}

impl AdminDashboard {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run the four dashboard fetches concurrently, each in its own task.
    ///
    /// Dropping the returned future (the view going away) aborts whatever
    /// is still in flight.
    #[instrument(skip(self))]
    pub async fn load(&self) -> DashboardView {
        let mut scope = ViewScope::new("admin-dashboard");

        let client = self.client.clone();
        let today = scope.spawn(async move { client.exams_today().await.map(|e| e.len()) });
        let client = self.client.clone();
        let pending = scope.spawn(async move { client.exams_pending().await.map(|e| e.len()) });
        let client = self.client.clone();
        let bonus = scope.spawn(async move {
            let report = client.bonus_report().await?;
            Ok::<_, ApiError>(top_referrers(&report.data, TOP_REFERRERS).to_vec())
        });
        let client = self.client.clone();
        let revenue = scope.spawn(async move {
            let week = client.revenue_week().await?;
            Ok::<_, ApiError>(RevenueChart::from_week(&week))
        });

        let (today, pending, bonus, revenue) =
            tokio::join!(today.join(), pending.join(), bonus.join(), revenue.join());

        let (today_count, today_failed) = isolated(today, "today");
        let (pending_count, pending_failed) = isolated(pending, "pending");
        let (top_referrers, bonus_failed) = isolated(bonus, "bonus report");
        let (revenue, revenue_failed) = isolated(revenue, "revenue");
        let failed: Vec<_> = [today_failed, pending_failed, bonus_failed, revenue_failed]
            .into_iter()
            .flatten()
            .collect();

        info!(failed = failed.len(), "Dashboard loaded");
        DashboardView {
            today_count,
            pending_count,
            top_referrers,
            revenue,
            failed,
        }
    }
}
