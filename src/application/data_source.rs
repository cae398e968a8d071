// Data source capabilities consumed by the loader and the health probe
use crate::domain::health::HealthReport;
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// The four read-only resources that make up a dashboard snapshot.
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    /// Aggregate status snapshot (`GET /dashboard`)
    async fn fetch_dashboard(&self) -> Result<Value, ApiError>;

    /// Threat-intel counters (`GET /intel-feed`)
    async fn fetch_intel_feed(&self) -> Result<Value, ApiError>;

    /// Agent fleet status (`GET /agents`)
    async fn fetch_agents(&self) -> Result<Value, ApiError>;

    /// Alert list and statistics (`GET /alerts`)
    async fn fetch_alerts(&self) -> Result<Value, ApiError>;
}

/// Liveness endpoint rooted at the backend's bare origin.
#[async_trait]
pub trait HealthSource: Send + Sync {
    async fn fetch_health(&self) -> Result<HealthReport, ApiError>;
}
