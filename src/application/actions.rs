// User intents for placeholder affordances
use crate::domain::indicators::{ActivityEntry, Severity};
use crate::domain::view::Tab;
use serde::{Deserialize, Serialize};

/// A user-intent signal with no backing operation yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum UserIntent {
    InitiateEmergencyResponse { alert_title: String },
    ReviewMitigationPlan { alert_title: String },
    CustomizeLayout,
    ViewNotifications,
    ViewAgentHealth,
}

impl UserIntent {
    /// Action offered on an alert card, picked by severity.
    pub fn for_alert(entry: &ActivityEntry) -> Self {
        let alert_title = entry.title.clone();
        match entry.severity {
            Severity::Critical => UserIntent::InitiateEmergencyResponse { alert_title },
            _ => UserIntent::ReviewMitigationPlan { alert_title },
        }
    }

    /// Tab the view should switch to after this intent, if any.
    pub fn target_tab(&self) -> Option<Tab> {
        match self {
            UserIntent::ViewAgentHealth => Some(Tab::AgentNetwork),
            _ => None,
        }
    }
}

pub trait ActionSink: Send + Sync {
    fn on_action(&self, intent: &UserIntent);
}

#[derive(Debug, Default, Clone)]
pub struct LoggingActionSink;

impl ActionSink for LoggingActionSink {
    fn on_action(&self, intent: &UserIntent) {
        tracing::info!(?intent, "User action received");
    }
}
