use std::sync::RwLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app_config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 409 from any endpoint: somebody else got there first
    #[error("conflict: {detail}")]
    Conflict { detail: String, seat_ids: Vec<i64> },

    #[error("api returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Error body shape of the box-office API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
    #[serde(default)]
    conflicting_seats: Vec<i64>,
}

/// Acknowledgement body for endpoints that return no entity
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {
    pub detail: String,
}

/// Thin JSON client for the box-office API. One instance per operator
/// session; the bearer token is attached after login.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Attach the bearer token used by all subsequent requests
    pub fn set_token(&self, token: String) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_else(|_| ErrorBody {
            detail: status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            conflicting_seats: Vec::new(),
        });

        if status == reqwest::StatusCode::CONFLICT {
            return Err(ApiError::Conflict {
                detail: body.detail,
                seat_ids: body.conflicting_seats,
            });
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            detail: body.detail,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        self.send(self.http.patch(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "DELETE");
        self.send(self.http.delete(self.url(path))).await
    }
}
