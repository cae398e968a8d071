// In-memory data sources used by the application tests
use crate::application::data_source::{DashboardDataSource, HealthSource};
use crate::domain::health::HealthReport;
use crate::infrastructure::error::ApiError;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Dashboard,
    IntelFeed,
    Agents,
    Alerts,
}

pub fn dashboard_payload() -> Value {
    json!({
        "enico_status": "active",
        "agent_overview": {"online": 5},
        "threat_summary": {"level": "ELEVATED"}
    })
}

pub fn intel_payload() -> Value {
    json!({"total_threats": 42, "critical_threats": 3, "last_updated": "2024-05-01T12:00:00Z"})
}

pub fn agents_payload() -> Value {
    json!({"system_health": {"active_agents": 5, "total_agents": 5}, "performance_metrics": {}})
}

pub fn alerts_payload() -> Value {
    json!({
        "recent_alerts": [{"alert_id": "ALT-1", "severity": "CRITICAL"}],
        "alert_statistics": {"active_alerts": 1}
    })
}

/// Fixture source that counts fetches and can fail or block on demand.
#[derive(Default)]
pub struct FakeSource {
    calls: [AtomicUsize; 4],
    failing: Mutex<Option<Endpoint>>,
    gate: Option<Arc<Notify>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch of `/dashboard` waits for the returned notifier first.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let source = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (source, gate)
    }

    pub fn fail(&self, endpoint: Option<Endpoint>) {
        *self.failing.lock().unwrap() = endpoint;
    }

    /// Fetches started against `endpoint`, counted before any gate.
    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls[endpoint as usize].load(Ordering::SeqCst)
    }

    /// Number of polling cycles observed, counted on `/dashboard`.
    pub fn cycles(&self) -> usize {
        self.calls(Endpoint::Dashboard)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.iter().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    fn record(&self, endpoint: Endpoint) {
        self.calls[endpoint as usize].fetch_add(1, Ordering::SeqCst);
    }

    fn respond(&self, endpoint: Endpoint, payload: Value) -> Result<Value, ApiError> {
        if *self.failing.lock().unwrap() == Some(endpoint) {
            return Err(ApiError::Http {
                status: 500,
                url: format!("fake://{endpoint:?}"),
                body: "internal error".to_string(),
            });
        }
        Ok(payload)
    }
}

#[async_trait]
impl DashboardDataSource for FakeSource {
    async fn fetch_dashboard(&self) -> Result<Value, ApiError> {
        self.record(Endpoint::Dashboard);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.respond(Endpoint::Dashboard, dashboard_payload())
    }

    async fn fetch_intel_feed(&self) -> Result<Value, ApiError> {
        self.record(Endpoint::IntelFeed);
        self.respond(Endpoint::IntelFeed, intel_payload())
    }

    async fn fetch_agents(&self) -> Result<Value, ApiError> {
        self.record(Endpoint::Agents);
        self.respond(Endpoint::Agents, agents_payload())
    }

    async fn fetch_alerts(&self) -> Result<Value, ApiError> {
        self.record(Endpoint::Alerts);
        self.respond(Endpoint::Alerts, alerts_payload())
    }
}

/// Health responder returning a fixed status, or failing when `None`.
pub struct FakeHealth {
    status: Option<String>,
    calls: AtomicUsize,
}

impl FakeHealth {
    pub fn reporting(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthSource for FakeHealth {
    async fn fetch_health(&self) -> Result<HealthReport, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.status {
            Some(status) => Ok(HealthReport {
                status: Some(status.clone()),
            }),
            None => Err(ApiError::Http {
                status: 503,
                url: "fake://health".to_string(),
                body: String::new(),
            }),
        }
    }
}
