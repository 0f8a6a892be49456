use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::endpoints::Endpoint;
use crate::types::{LoginRequest, LoginResponse};

/// Single failure kind surfaced to callers. Transport errors, non-2xx statuses
/// and application-declared failures all land here; callers must not assume
/// partial success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// HTTP status, when one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Rejected(_) => None,
        }
    }
}

/// Thin one-shot HTTP client. No retries, no caching; every request carries
/// the bearer credential when one is supplied.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Performs one call against a named endpoint and returns the parsed JSON
    /// body. Any non-2xx status is a failure regardless of body shape; a 2xx
    /// body carrying a top-level `error` field is an application-declared
    /// failure.
    pub async fn execute<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let mut request = self.http.request(endpoint.method(), &url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(%url, "request failed: {e}");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str::<Value>(&text).ok())
                .and_then(|body| declared_error(&body))
                .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));
            error!(%url, status = status.as_u16(), "{message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let payload: Value = response.json().await?;
        if let Some(message) = declared_error(&payload) {
            error!(%url, "{message}");
            return Err(ApiError::Rejected(message));
        }

        Ok(payload)
    }

    /// `execute` without a request body, for the read-only resources.
    pub async fn get(&self, endpoint: &Endpoint, token: Option<&str>) -> Result<Value, ApiError> {
        self.execute(endpoint, Option::<&()>::None, token).await
    }

    /// Typed login round trip. The issued token is the caller's to persist.
    pub async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let payload = self.execute(&Endpoint::Login, Some(input), None).await?;
        serde_json::from_value(payload)
            .map_err(|e| ApiError::Rejected(format!("malformed login response: {e}")))
    }
}

/// An `error` field in an otherwise successful body marks a declared failure.
fn declared_error(payload: &Value) -> Option<String> {
    payload
        .get("error")
        .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
}
