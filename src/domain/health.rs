// Backend health domain model
use serde::{Deserialize, Serialize};

/// Connectivity indicator shown next to the vault title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Checking,
    Connected,
    Disconnected,
}

/// Body returned by the backend's bare `/health` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthStatus {
    pub fn from_report(report: &HealthReport) -> Self {
        match report.status.as_deref() {
            Some("healthy") => HealthStatus::Connected,
            _ => HealthStatus::Disconnected,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, HealthStatus::Checking)
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "Checking...",
            HealthStatus::Connected => "Connected",
            HealthStatus::Disconnected => "Disconnected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: Option<&str>) -> HealthReport {
        HealthReport {
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_from_report() {
        let cases = [
            (Some("healthy"), HealthStatus::Connected),
            (Some("degraded"), HealthStatus::Disconnected),
            (Some("Healthy"), HealthStatus::Disconnected),
            (None, HealthStatus::Disconnected),
        ];
        for (status, expected) in cases {
            assert_eq!(HealthStatus::from_report(&report(status)), expected, "{status:?}");
        }
    }

    #[test]
    fn test_report_without_status_field() {
        let parsed: HealthReport = serde_json::from_str(r#"{"uptime": 12}"#).unwrap();
        assert_eq!(HealthStatus::from_report(&parsed), HealthStatus::Disconnected);
    }

    #[test]
    fn test_serialized_form() {
        assert_eq!(serde_json::to_string(&HealthStatus::Checking).unwrap(), "\"checking\"");
        assert!(!HealthStatus::Checking.is_settled());
        assert!(HealthStatus::Disconnected.is_settled());
    }
}
