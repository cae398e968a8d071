// Dashboard snapshot domain model
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Result of one successful polling cycle across the four data endpoints.
///
/// Payloads are kept exactly as the backend returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub dashboard: Value,
    pub intel_feed: Value,
    pub agents: Value,
    pub alerts: Value,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn new(dashboard: Value, intel_feed: Value, agents: Value, alerts: Value) -> Self {
        Self {
            dashboard,
            intel_feed,
            agents,
            alerts,
            fetched_at: Utc::now(),
        }
    }
}

/// State published by the loader to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoaderState {
    pub snapshot: Option<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}
