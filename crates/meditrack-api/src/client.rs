//! HTTP client wrapper.
//!
//! Every request goes through [`ApiClient::send`], which attaches the
//! persisted bearer token and turns a 401 into a cleared session.

use std::sync::Arc;

use meditrack_core::SessionStore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

use crate::config::ApiConfig;
use crate::error::{extract_message, ApiError, ApiResult};

/// What a 401 does to the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    Invalidate,
    Keep,
}

/// Shared handle to the MediTrack API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<T, ()>(Method::GET, path, &[], None, OnUnauthorized::Invalidate).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        self.send::<T, ()>(Method::GET, path, query, None, OnUnauthorized::Invalidate).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, &[], Some(body), OnUnauthorized::Invalidate).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::PATCH, path, &[], Some(body), OnUnauthorized::Invalidate).await
    }

    /// DELETE with a JSON body.
    pub async fn delete_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::DELETE, path, &[], Some(body), OnUnauthorized::Invalidate).await
    }

    /// POST credentials. A 401 here means the credentials were wrong, so the
    /// session that is already active stays as it is.
    pub(crate) async fn post_credentials<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, path, &[], Some(body), OnUnauthorized::Keep)
            .await
    }

    #[instrument(skip(self, method, query, body, on_unauthorized), fields(method = %method))]
    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
        on_unauthorized: OnUnauthorized,
    ) -> ApiResult<T> {
        let url = self.config.endpoint(path)?;
        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Request failed");
            ApiError::Transport(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), len = bytes.len(), "Response received");

        if status.is_success() {
            return decode_body(&bytes);
        }

        let message = extract_message(&bytes);
        match status {
            StatusCode::UNAUTHORIZED => {
                if on_unauthorized == OnUnauthorized::Invalidate {
                    if let Err(e) = self.session.invalidate() {
                        warn!(error = %e, "Could not clear rejected session");
                    }
                }
                Err(ApiError::Unauthorized { message })
            }
            StatusCode::CONFLICT => Err(ApiError::Conflict { message }),
            _ => {
                warn!(status = status.as_u16(), message = ?message, "Request rejected");
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

/// Decode a success body; an empty body reads as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_slice(bytes)?)
}
