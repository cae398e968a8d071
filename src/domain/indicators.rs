// Derived dashboard indicators
use super::snapshot::DashboardSnapshot;
use serde::Serialize;
use serde_json::Value;

/// Maximum number of entries shown in the recent activity feed.
pub const ACTIVITY_FEED_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Other,
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            _ => Severity::Other,
        }
    }
}

/// Headline numbers for the KPI panel, threat map and agent pulse widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyIndicators {
    pub active_threats: u64,
    pub critical_threats: u64,
    pub intel_last_updated: Option<String>,
    pub active_alerts: u64,
    pub critical_alerts: u64,
    pub system_health: String,
    pub system_uptime: String,
    pub active_agents: u64,
    pub total_agents: u64,
    pub pipeline_throughput: String,
    pub executions_today: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub alert_id: String,
    pub title: String,
    pub severity: Severity,
    pub timestamp: Option<String>,
    pub vault_verified: bool,
}

fn number_at(value: &Value, pointer: &str) -> u64 {
    value.pointer(pointer).and_then(Value::as_u64).unwrap_or(0)
}

fn text_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl KeyIndicators {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let intel = &snapshot.intel_feed;
        let alerts = &snapshot.alerts;
        let agents = &snapshot.agents;

        Self {
            active_threats: number_at(intel, "/total_threats"),
            critical_threats: number_at(intel, "/critical_threats"),
            intel_last_updated: text_at(intel, "/last_updated"),
            active_alerts: number_at(alerts, "/alert_statistics/active_alerts"),
            critical_alerts: number_at(alerts, "/alert_statistics/critical_alerts"),
            system_health: text_at(agents, "/system_health/overall_status")
                .unwrap_or_else(|| "Unknown".to_string()),
            system_uptime: text_at(agents, "/system_health/system_uptime").unwrap_or_default(),
            active_agents: number_at(agents, "/system_health/active_agents"),
            total_agents: number_at(agents, "/system_health/total_agents"),
            pipeline_throughput: text_at(agents, "/system_health/pipeline_throughput")
                .unwrap_or_else(|| "Unknown".to_string()),
            executions_today: number_at(agents, "/performance_metrics/total_executions_today"),
        }
    }
}

impl ActivityEntry {
    fn from_alert(alert: &Value) -> Self {
        Self {
            alert_id: text_at(alert, "/alert_id").unwrap_or_default(),
            title: text_at(alert, "/title").unwrap_or_default(),
            severity: Severity::parse(alert.get("severity").and_then(Value::as_str).unwrap_or("")),
            timestamp: text_at(alert, "/timestamp"),
            vault_verified: alert
                .get("vault_integration")
                .map(is_truthy)
                .unwrap_or(false),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Most recent alerts, newest first as delivered by the backend.
pub fn recent_activity(snapshot: &DashboardSnapshot) -> Vec<ActivityEntry> {
    snapshot
        .alerts
        .get("recent_alerts")
        .and_then(Value::as_array)
        .map(|alerts| {
            alerts
                .iter()
                .take(ACTIVITY_FEED_LIMIT)
                .map(ActivityEntry::from_alert)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(intel: Value, agents: Value, alerts: Value) -> DashboardSnapshot {
        DashboardSnapshot::new(json!({}), intel, agents, alerts)
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let indicators = KeyIndicators::from_snapshot(&snapshot(json!({}), json!({}), json!({})));

        assert_eq!(indicators.active_threats, 0);
        assert_eq!(indicators.active_alerts, 0);
        assert_eq!(indicators.system_health, "Unknown");
        assert_eq!(indicators.pipeline_throughput, "Unknown");
        assert_eq!(indicators.system_uptime, "");
        assert!(indicators.intel_last_updated.is_none());
    }

    #[test]
    fn test_reads_nested_fields() {
        let indicators = KeyIndicators::from_snapshot(&snapshot(
            json!({
                "total_threats": 42,
                "critical_threats": 3,
                "last_updated": "2024-01-01T00:00:00Z"
            }),
            json!({
                "system_health": {
                    "active_agents": 5,
                    "total_agents": 6,
                    "overall_status": "OPERATIONAL"
                },
                "performance_metrics": {"total_executions_today": 120}
            }),
            json!({"alert_statistics": {"active_alerts": 7, "critical_alerts": 2}}),
        ));

        assert_eq!(indicators.active_threats, 42);
        assert_eq!(indicators.critical_threats, 3);
        assert_eq!(indicators.active_alerts, 7);
        assert_eq!(indicators.critical_alerts, 2);
        assert_eq!(indicators.active_agents, 5);
        assert_eq!(indicators.total_agents, 6);
        assert_eq!(indicators.executions_today, 120);
        assert_eq!(indicators.system_health, "OPERATIONAL");
    }

    #[test]
    fn test_activity_feed_is_capped() {
        let alerts: Vec<Value> = (0..12)
            .map(|i| json!({"alert_id": format!("ALT-{i}"), "title": "t", "severity": "HIGH"}))
            .collect();
        let feed = recent_activity(&snapshot(
            json!({}),
            json!({}),
            json!({"recent_alerts": alerts}),
        ));

        assert_eq!(feed.len(), ACTIVITY_FEED_LIMIT);
        assert_eq!(feed[0].alert_id, "ALT-0");
        assert_eq!(feed[0].severity, Severity::High);
    }

    #[test]
    fn test_activity_entry_fields() {
        let feed = recent_activity(&snapshot(
            json!({}),
            json!({}),
            json!({"recent_alerts": [
                {
                    "alert_id": "A1",
                    "title": "Grid breach",
                    "severity": "CRITICAL",
                    "vault_integration": {"tx": "0x1"}
                },
                {"alert_id": "A2", "severity": "LOW"}
            ]}),
        ));

        assert_eq!(feed[0].severity, Severity::Critical);
        assert!(feed[0].vault_verified);
        assert_eq!(feed[1].severity, Severity::Other);
        assert!(!feed[1].vault_verified);
        assert_eq!(feed[1].title, "");
    }

    #[test]
    fn test_missing_recent_alerts() {
        assert!(recent_activity(&snapshot(json!({}), json!({}), json!({}))).is_empty());
    }
}
