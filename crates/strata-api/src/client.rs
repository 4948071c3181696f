//! HTTP client for the platform test-execution API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::types::{RunTestsRequest, RunTestsResponse, TestCoverage};

/// User agent for platform requests.
pub const API_USER_AGENT: &str = concat!("strata-cli/", env!("CARGO_PKG_VERSION"));

/// Default platform base URL.
pub const DEFAULT_API_URL: &str = "https://api.strata.dev/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote test execution, as consumed by command handlers.
///
/// The command layer depends only on this trait so it can be exercised
/// against a mock service in tests.
#[async_trait]
pub trait TestService: Send + Sync {
    /// Run the named tests on the platform, scoped to `namespace` when
    /// non-empty. Identifiers are passed through verbatim, including the
    /// `all` sentinel.
    async fn run_tests(&self, tests: &[String], namespace: &str) -> ApiResult<TestCoverage>;
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Platform base URL.
    pub url: String,

    /// Bearer token, sent when present.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Read configuration from `STRATA_API_*` environment variables.
    pub fn from_env() -> Self {
        let url = std::env::var("STRATA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let token = std::env::var("STRATA_API_TOKEN").ok().filter(|t| !t.is_empty());
        let timeout_secs = std::env::var("STRATA_API_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            url,
            token,
            timeout_secs,
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the auth token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Platform API client.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PlatformClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(API_USER_AGENT));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ApiError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        // Normalize base URL (remove trailing slash)
        let base_url = config.url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token: config.token,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    async fn post_run_tests(&self, body: &RunTestsRequest) -> ApiResult<RunTestsResponse> {
        let url = format!("{}/tests/run", self.base_url);
        debug!(url = %url, tests = body.tests.len(), "requesting remote test run");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ApiError::Unauthorized { message },
                404 => ApiError::NotFound { message },
                s if status.is_server_error() => ApiError::Server { status: s, message },
                s => ApiError::UnexpectedStatus { status: s, message },
            });
        }

        response.json().await.map_err(|e| ApiError::InvalidResponse {
            message: format!("failed to decode test results: {}", e),
        })
    }
}

#[async_trait]
impl TestService for PlatformClient {
    async fn run_tests(&self, tests: &[String], namespace: &str) -> ApiResult<TestCoverage> {
        let body = RunTestsRequest {
            tests: tests.to_vec(),
            namespace: namespace.to_string(),
        };
        let raw = self.post_run_tests(&body).await?;
        debug!(
            number_run = raw.number_run,
            number_failures = raw.number_failures,
            "test run complete"
        );
        Ok(TestCoverage::from(raw))
    }
}
