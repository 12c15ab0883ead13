use meditrack_core::forms::{NewUserForm, Validate};
use meditrack_core::models::UserAccount;
use tracing::{info, instrument};

use super::{Outcome, PageState};
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};

const ERR_LOAD: &str = "Failed to load users";
const ERR_CREATE: &str = "Failed to create user";
const ERR_DELETE: &str = "Failed to delete user";

/// Staff account administration.
#[derive(Debug, Clone)]
pub struct UsersPage {
    client: ApiClient,
}

impl UsersPage {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn load(&self) -> PageState<Vec<UserAccount>> {
        PageState::from_result(self.client.list_users().await, ERR_LOAD)
    }

    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn create(&self, form: &NewUserForm) -> Outcome {
        match self.send_create(form).await {
            Ok(()) => Outcome::success("User created"),
            Err(e) => Outcome::failed(&e, ERR_CREATE),
        }
    }

    async fn send_create(&self, form: &NewUserForm) -> ApiResult<()> {
        form.validate()?;
        let user = form
            .user()
            .ok_or_else(|| ApiError::Unexpected("validated user without role".into()))?;
        self.client.create_user(&user).await?;
        info!(username = %user.username, role = %user.role, "User created");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, username: &str) -> Outcome {
        match self.client.delete_user(username).await {
            Ok(_) => {
                info!("User deleted");
                Outcome::success("User deleted")
            }
            Err(e) => Outcome::failed(&e, ERR_DELETE),
        }
    }
}
