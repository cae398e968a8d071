// Polling coordinator - Immediate refresh, then one per period until deactivated
use crate::application::loader::DashboardDataLoader;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub struct Poller;

/// Live polling loop. Dropping the handle stops the timer.
pub struct PollerHandle {
    loader: Arc<DashboardDataLoader>,
    task: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn activate(loader: Arc<DashboardDataLoader>, period: Duration) -> PollerHandle {
        tracing::info!(period_secs = period.as_secs_f64(), "Activating dashboard polling");

        let task = tokio::spawn({
            let loader = loader.clone();
            async move {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    ticker.tick().await;
                    let outcome = loader.refresh().await;
                    tracing::debug!(?outcome, "Scheduled refresh finished");
                }
            }
        });

        PollerHandle {
            loader,
            task: Some(task),
        }
    }
}

impl PollerHandle {
    pub fn loader(&self) -> &Arc<DashboardDataLoader> {
        &self.loader
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the timer and any scheduled refresh still in flight.
    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.loader.dispose();
            tracing::info!("Dashboard polling deactivated");
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.deactivate();
    }
}
