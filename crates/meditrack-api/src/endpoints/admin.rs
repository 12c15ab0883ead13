use chrono::NaiveDate;
use meditrack_core::models::{
    AuditLogEntry, BonusHistoryEntry, BonusReport, BonusResult, NewUser, RevenueWeek,
    UserAccount,
};
use serde_json::{json, Value};
use tracing::instrument;

use super::{decode_list, or_legacy, paths};
use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ApiResult<Vec<UserAccount>> {
        let value = or_legacy(self.get(paths::USERS).await, paths::LEGACY_GET_USERS, || {
            self.get(paths::LEGACY_GET_USERS)
        })
        .await?;
        decode_list(value, "users")
    }

    #[instrument(skip(self, user), fields(username = %user.username, role = %user.role))]
    pub async fn create_user(&self, user: &NewUser) -> ApiResult<Value> {
        or_legacy(
            self.post(paths::USERS, user).await,
            paths::LEGACY_CREATE_USER,
            || self.post(paths::LEGACY_CREATE_USER, user),
        )
        .await
    }

    /// The legacy route takes the same body over POST.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, username: &str) -> ApiResult<Value> {
        let body = json!({ "username": username });
        or_legacy(
            self.delete_json(paths::USERS, &body).await,
            paths::LEGACY_DELETE_USER,
            || self.post(paths::LEGACY_DELETE_USER, &body),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn bonus_report(&self) -> ApiResult<BonusReport> {
        let report: Option<BonusReport> = self.get(paths::BONUS_REPORT).await?;
        Ok(report.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn bonus_history(&self) -> ApiResult<Vec<BonusHistoryEntry>> {
        decode_list(self.get(paths::BONUS_HISTORY).await?, "bonus history")
    }

    #[instrument(skip(self))]
    pub async fn revenue_week(&self) -> ApiResult<RevenueWeek> {
        let week: Option<RevenueWeek> = self.get(paths::REVENUE_WEEK).await?;
        Ok(week.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn audit_logs(&self) -> ApiResult<Vec<AuditLogEntry>> {
        decode_list(self.get(paths::AUDIT_LOGS).await?, "audit logs")
    }

    /// Run the bonus calculator for the week ending on `date` (server
    /// default when `None`).
    #[instrument(skip(self))]
    pub async fn calculate_bonus(&self, date: Option<NaiveDate>) -> ApiResult<Vec<BonusResult>> {
        let date = date.map(|d| d.format("%Y-%m-%d").to_string());
        let query: Vec<(&str, &str)> = date.iter().map(|d| ("date", d.as_str())).collect();

        let value = or_legacy(
            self.get_query(paths::CALCULATE_BONUS, &query).await,
            paths::LEGACY_CALCULATE_BONUS,
            || self.get_query(paths::LEGACY_CALCULATE_BONUS, &query),
        )
        .await?;
        decode_list(value, "bonus results")
    }
}
