// HTTP request handlers
use crate::application::actions::UserIntent;
use crate::application::loader::RefreshOutcome;
use crate::domain::health::HealthStatus;
use crate::domain::indicators::{ActivityEntry, KeyIndicators, recent_activity};
use crate::domain::snapshot::LoaderState;
use crate::domain::view::{DashboardView, Tab};
use crate::infrastructure::error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

type HandlerError = (StatusCode, Json<Value>);

#[derive(Serialize)]
pub struct StateResponse {
    #[serde(flatten)]
    pub loader: LoaderState,
    pub health: HealthStatus,
}

#[derive(Serialize)]
pub struct TabResponse {
    pub tab: Tab,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardView>,
}

#[derive(Serialize)]
pub struct IndicatorsResponse {
    pub indicators: KeyIndicators,
    pub recent_activity: Vec<ActivityEntry>,
    pub alert_actions: Vec<UserIntent>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current loader triple plus backend connectivity
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        loader: state.loader.state(),
        health: state.health.status(),
    })
}

pub async fn get_view(
    Path(tab): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<TabResponse> {
    let tab = Tab::from_slug(&tab);
    let dashboard = match tab {
        Tab::Dashboard => Some(state.loader.state().view()),
        _ => None,
    };

    Json(TabResponse {
        tab,
        title: tab.title(),
        placeholder: tab.placeholder(),
        dashboard,
    })
}

/// Indicators from the last valid snapshot, which stays servable while the
/// next cycle is in flight. A failed cycle invalidates it.
pub async fn get_indicators(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IndicatorsResponse>, HandlerError> {
    let loader = state.loader.state();
    if let Some(message) = loader.error {
        return Err((StatusCode::CONFLICT, Json(json!({ "error": message }))));
    }
    let Some(snapshot) = loader.snapshot else {
        return Err((
            StatusCode::CONFLICT,
            Json(json!({ "error": "No dashboard snapshot available" })),
        ));
    };

    let recent_activity = recent_activity(&snapshot);
    let alert_actions = recent_activity.iter().map(UserIntent::for_alert).collect();
    Ok(Json(IndicatorsResponse {
        indicators: KeyIndicators::from_snapshot(&snapshot),
        recent_activity,
        alert_actions,
    }))
}

/// Manual retry
pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<RefreshOutcome> {
    Json(state.loader.retry().await)
}

pub async fn post_action(
    State(state): State<Arc<AppState>>,
    Json(intent): Json<UserIntent>,
) -> (StatusCode, Json<Value>) {
    state.actions.on_action(&intent);
    (
        StatusCode::ACCEPTED,
        Json(json!({ "accepted": true, "switch_to": intent.target_tab() })),
    )
}

fn passthrough(result: Result<Value, ApiError>, what: &str) -> Result<Json<Value>, HandlerError> {
    result.map(Json).map_err(|e| {
        tracing::error!("Failed to fetch {}: {}", what, e);
        (StatusCode::BAD_GATEWAY, Json(json!({ "error": e.to_string() })))
    })
}

pub async fn vault_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, HandlerError> {
    passthrough(state.client.fetch_vault_settings().await, "vault settings")
}

pub async fn system_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, HandlerError> {
    passthrough(state.client.fetch_system_status().await, "system status")
}

pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(scenario): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    passthrough(state.client.run_simulation(&scenario).await, "simulation")
}

pub async fn execute_pipeline(
    State(state): State<Arc<AppState>>,
    Json(input): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    passthrough(state.client.execute_pipeline(&input).await, "pipeline execution")
}
