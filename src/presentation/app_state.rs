// Application state for HTTP handlers
use crate::application::actions::ActionSink;
use crate::application::health_probe::HealthProbe;
use crate::application::loader::DashboardDataLoader;
use crate::infrastructure::api_client::VaultApiClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DashboardDataLoader>,
    pub health: Arc<HealthProbe>,
    pub client: Arc<VaultApiClient>,
    pub actions: Arc<dyn ActionSink>,
}
