use meditrack_core::forms::{LoginForm, Validate};
use meditrack_core::{locale, Role, Route};
use tracing::{error, info, instrument, warn};

use super::{Notice, Outcome};
use crate::client::ApiClient;

/// Login screen; also owns logout.
#[derive(Debug, Clone)]
pub struct LoginPage {
    client: ApiClient,
}

impl LoginPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Sign in and land on the role's start page.
    ///
    /// A blank token or a role the client does not know is refused before
    /// anything is persisted.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn submit(&self, form: &LoginForm) -> Outcome {
        if let Err(errors) = form.validate() {
            return Outcome::invalid(errors);
        }

        let response = match self.client.login(form).await {
            Ok(response) => response,
            Err(e) => return Outcome::failed(&e, locale::ERR_LOGIN_FAILED),
        };

        let token = response.access_token.trim();
        if token.is_empty() {
            warn!("Login returned no access token");
            return Outcome {
                notice: Some(Notice::Error(locale::ERR_LOGIN_FAILED.to_string())),
                ..Default::default()
            };
        }

        let Some(role) = Role::from_external(&response.role) else {
            warn!(role = %response.role, "Login returned an unknown role");
            return Outcome {
                notice: Some(Notice::Error(locale::ERR_LOGIN_FAILED.to_string())),
                ..Default::default()
            };
        };

        let username = response
            .username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(form.username.trim());

        match self
            .client
            .session()
            .login(token, role, username)
        {
            Ok(landing) => {
                info!(%role, ?landing, "Login succeeded");
                Outcome::redirect(landing)
            }
            Err(e) => {
                error!(error = %e, "Could not persist session");
                Outcome {
                    notice: Some(Notice::Error(locale::ERR_LOGIN_FAILED.to_string())),
                    ..Default::default()
                }
            }
        }
    }

    pub fn logout(&self) -> Outcome {
        match self.client.session().logout() {
            Ok(route) => Outcome::redirect(route),
            Err(e) => {
                error!(error = %e, "Could not clear session");
                Outcome {
                    notice: Some(Notice::Error(e.to_string())),
                    redirect: Some(Route::Login),
                    ..Default::default()
                }
            }
        }
    }
}
