// Health probe - One-shot backend reachability check
use crate::application::data_source::HealthSource;
use crate::domain::health::HealthStatus;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

pub struct HealthProbe {
    source: Arc<dyn HealthSource>,
    status: watch::Sender<HealthStatus>,
    probe_lock: Mutex<()>,
}

impl HealthProbe {
    pub fn new(source: Arc<dyn HealthSource>) -> Self {
        let (status, _) = watch::channel(HealthStatus::Checking);
        Self {
            source,
            status,
            probe_lock: Mutex::new(()),
        }
    }

    pub fn status(&self) -> HealthStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<HealthStatus> {
        self.status.subscribe()
    }

    /// Probe the backend once. Later calls return the settled status.
    ///
    /// Never fails: every error collapses to [`HealthStatus::Disconnected`].
    pub async fn check(&self) -> HealthStatus {
        let _probing = self.probe_lock.lock().await;
        let current = self.status();
        if current.is_settled() {
            return current;
        }

        let settled = match self.source.fetch_health().await {
            Ok(report) => {
                let status = HealthStatus::from_report(&report);
                tracing::info!(reported = ?report.status, ?status, "Backend health checked");
                status
            }
            Err(e) => {
                tracing::warn!("Backend health check failed: {}", e);
                HealthStatus::Disconnected
            }
        };

        self.status.send_replace(settled);
        settled
    }
}
