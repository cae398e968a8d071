// Vault backend HTTP client
use crate::application::data_source::{DashboardDataSource, HealthSource};
use crate::domain::health::HealthReport;
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct VaultApiClient {
    client: reqwest::Client,
    settings: BackendSettings,
}

impl VaultApiClient {
    pub fn new(settings: BackendSettings) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, settings })
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.settings.api_url(path);
        self.execute(Method::GET, &url, self.client.get(&url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.settings.api_url(path);
        self.execute(Method::POST, &url, self.client.post(&url).json(body))
            .await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Value, ApiError> {
        tracing::debug!("API Request: {} {}", method, url);

        let response = request.send().await.map_err(|e| {
            tracing::error!("API Request Error: {} {}: {}", method, url, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "API Response Error: {}", url);
            return Err(ApiError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        tracing::debug!("API Response: {} {}", status.as_u16(), url);

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub async fn fetch_vault_settings(&self) -> Result<Value, ApiError> {
        self.get_json("/vault-settings").await
    }

    pub async fn fetch_system_status(&self) -> Result<Value, ApiError> {
        self.get_json("/system/status").await
    }

    pub async fn run_simulation(&self, scenario: &Value) -> Result<Value, ApiError> {
        self.post_json("/simulate", scenario).await
    }

    pub async fn execute_pipeline(&self, input: &Value) -> Result<Value, ApiError> {
        self.post_json("/pipeline/execute", input).await
    }
}

#[async_trait]
impl DashboardDataSource for VaultApiClient {
    async fn fetch_dashboard(&self) -> Result<Value, ApiError> {
        self.get_json("/dashboard").await
    }

    async fn fetch_intel_feed(&self) -> Result<Value, ApiError> {
        self.get_json("/intel-feed").await
    }

    async fn fetch_agents(&self) -> Result<Value, ApiError> {
        self.get_json("/agents").await
    }

    async fn fetch_alerts(&self) -> Result<Value, ApiError> {
        self.get_json("/alerts").await
    }
}

#[async_trait]
impl HealthSource for VaultApiClient {
    async fn fetch_health(&self) -> Result<HealthReport, ApiError> {
        let url = self.settings.health_url();
        let body = self.execute(Method::GET, &url, self.client.get(&url)).await?;
        serde_json::from_value(body).map_err(|source| ApiError::Decode { url, source })
    }
}
