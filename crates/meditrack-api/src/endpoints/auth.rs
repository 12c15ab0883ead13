use meditrack_core::forms::LoginForm;
use serde::Deserialize;
use tracing::instrument;

use super::{or_legacy, paths};
use crate::client::ApiClient;
use crate::error::ApiResult;

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    /// Role as the server spells it; map with `Role::from_external`.
    pub role: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl ApiClient {
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn login(&self, form: &LoginForm) -> ApiResult<LoginResponse> {
        or_legacy(
            self.post_credentials(paths::LOGIN, form).await,
            paths::LEGACY_LOGIN,
            || self.post_credentials(paths::LEGACY_LOGIN, form),
        )
        .await
    }
}
