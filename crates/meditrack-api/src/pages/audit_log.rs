use meditrack_core::models::AuditLogEntry;
use tracing::instrument;

use super::PageState;
use crate::client::ApiClient;

/// Admin audit trail, newest first as served. A failed fetch shows an
/// empty log.
#[derive(Debug, Clone)]
pub struct AuditLogPage {
    client: ApiClient,
}

impl AuditLogPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Vec<AuditLogEntry>> {
        PageState::or_empty(self.client.audit_logs().await, "audit logs")
    }
}
