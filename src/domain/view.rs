// View model: sidebar tabs and the dashboard render decision
use super::snapshot::{DashboardSnapshot, LoaderState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Dashboard,
    AgentNetwork,
    SimulationLab,
    AuditTrail,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Dashboard,
        Tab::AgentNetwork,
        Tab::SimulationLab,
        Tab::AuditTrail,
    ];

    /// Unknown slugs fall back to the dashboard.
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.slug() == slug)
            .unwrap_or(Tab::Dashboard)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::AgentNetwork => "agent-network",
            Tab::SimulationLab => "simulation-lab",
            Tab::AuditTrail => "audit-trail",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::AgentNetwork => "Agent Network",
            Tab::SimulationLab => "Simulation Lab",
            Tab::AuditTrail => "Audit Trail",
        }
    }

    /// Placeholder copy for tabs that are not yet backed by data.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Tab::Dashboard => None,
            Tab::AgentNetwork => {
                Some("Coming soon with real-time agent status and performance metrics")
            }
            Tab::SimulationLab => {
                Some("Coming soon with real-time simulation execution and results")
            }
            Tab::AuditTrail => {
                Some("Coming soon with real-time audit logs and transaction history")
            }
        }
    }
}

/// What the dashboard should render for the current loader state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    Loading,
    Error { message: String, can_retry: bool },
    Ready { snapshot: DashboardSnapshot },
    Empty,
}

impl LoaderState {
    /// An error wins over any snapshot still held from an earlier cycle.
    pub fn view(&self) -> DashboardView {
        if self.loading {
            return DashboardView::Loading;
        }
        if let Some(message) = &self.error {
            return DashboardView::Error {
                message: message.clone(),
                can_retry: true,
            };
        }
        match &self.snapshot {
            Some(snapshot) => DashboardView::Ready {
                snapshot: snapshot.clone(),
            },
            None => DashboardView::Empty,
        }
    }
}
