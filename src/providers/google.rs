use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::errors::{ConfigError, ProviderError};
use crate::providers::{TranslateTextRequest, TranslateTextResponse, TranslationBackend};

/// Header naming the project that quota and billing are charged to
const USER_PROJECT_HEADER: &str = "x-goog-user-project";

/// Google Cloud Translation (v3) client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Service root, always ending in `/`
    endpoint: Url,
    /// OAuth bearer token
    access_token: Option<String>,
    /// Project charged for quota
    quota_project: Option<String>,
}

/// Error envelope returned by Google APIs
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl GoogleTranslate {
    /// Create a new client for the given service endpoint
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let mut endpoint = Url::parse(endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint,
            access_token: None,
            quota_project: None,
        })
    }

    /// Authenticate requests with a bearer token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Charge quota to the given project
    pub fn with_quota_project(mut self, project_id: impl Into<String>) -> Self {
        self.quota_project = Some(project_id.into());
        self
    }

    /// URL of the translateText method for a parent resource
    pub fn translate_url(&self, parent: &str) -> Result<Url, ProviderError> {
        self.endpoint
            .join(&format!("v3/{}:translateText", parent))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid request URL for {}: {}", parent, e)))
    }

    /// Map a non-success response to a provider error
    fn error_for_status(status: StatusCode, body: &str) -> ProviderError {
        let message = serde_json::from_str::<GoogleErrorEnvelope>(body)
            .map(|envelope| {
                if envelope.error.status.is_empty() {
                    envelope.error.message
                } else {
                    format!("{}: {}", envelope.error.status, envelope.error.message)
                }
            })
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslate {
    async fn translate_text(&self, request: TranslateTextRequest) -> Result<TranslateTextResponse, ProviderError> {
        let url = self.translate_url(&request.parent)?;
        debug!(
            "Sending {} segment(s) to {} ({} -> {})",
            request.contents.len(),
            url,
            request.source_language_code,
            request.target_language_code
        );

        let mut builder = self.client.post(url).json(&request);
        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(project) = &self.quota_project {
            builder = builder.header(USER_PROJECT_HEADER, project);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ProviderError::ConnectionError(e.to_string())
            } else {
                ProviderError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate API error ({}): {}", status, error_text);
            return Err(Self::error_for_status(status, &error_text));
        }

        response
            .json::<TranslateTextResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}
