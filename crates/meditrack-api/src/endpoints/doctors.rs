use meditrack_core::models::{Doctor, NewDoctor};
use serde_json::{json, Value};
use tracing::instrument;

use super::{decode_list, paths};
use crate::client::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        decode_list(self.get(paths::DOCTORS).await?, "doctors")
    }

    #[instrument(skip(self, doctor), fields(name = %doctor.name))]
    pub async fn create_doctor(&self, doctor: &NewDoctor) -> ApiResult<Value> {
        self.post(paths::DOCTORS, doctor).await
    }

    #[instrument(skip(self))]
    pub async fn delete_doctor(&self, id: i64) -> ApiResult<Value> {
        self.delete_json(paths::DOCTORS, &json!({ "id": id })).await
    }
}
