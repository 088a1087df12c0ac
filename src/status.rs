use crate::config::FrontendConfig;
use crate::envelope::ApiResponse;
use crate::error::{AppError, Result};

/// Outcome of probing the API health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Healthy,
    Unhealthy,
    Unreachable,
}

impl ApiStatus {
    pub fn message(self) -> &'static str {
        match self {
            ApiStatus::Healthy => "✅ API is connected and healthy",
            ApiStatus::Unhealthy => "❌ API returned an error",
            ApiStatus::Unreachable => "❌ Cannot connect to API",
        }
    }
}

/// Client for the API health endpoint shown on the home page
#[derive(Clone)]
pub struct StatusClient {
    config: FrontendConfig,
    client: reqwest::Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client creation fails
    pub fn new(config: FrontendConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder();
        if config.request_timeout_seconds > 0 {
            client_builder = client_builder.timeout(std::time::Duration::from_secs(
                config.request_timeout_seconds as u64,
            ));
        }

        Ok(Self {
            config,
            client: client_builder.build().map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e))
            })?,
        })
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.config.api_url.trim_end_matches('/'))
    }

    /// Probe `{api_url}/health`
    ///
    /// Transport failures and bodies that are not an envelope map to
    /// [`ApiStatus::Unreachable`]. An envelope with `success: false` maps to
    /// [`ApiStatus::Unhealthy`].
    pub async fn check(&self) -> ApiStatus {
        let url = self.health_url();

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("API connection error for {}: {}", url, e);
                return ApiStatus::Unreachable;
            }
        };

        match response.json::<ApiResponse>().await {
            Ok(body) if body.success => ApiStatus::Healthy,
            Ok(body) => {
                tracing::debug!("API at {} reported failure: {:?}", url, body.error);
                ApiStatus::Unhealthy
            }
            Err(e) => {
                tracing::warn!("API connection error for {}: {}", url, e);
                ApiStatus::Unreachable
            }
        }
    }
}
