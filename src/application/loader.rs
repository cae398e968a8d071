// Dashboard data loader - Four concurrent fetches merged into one snapshot
use crate::application::data_source::DashboardDataSource;
use crate::domain::snapshot::{DashboardSnapshot, LoaderState};
use futures::future::try_join4;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "error", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// All four fetches succeeded and the snapshot was replaced
    Updated,
    /// At least one fetch failed; carries the user-facing message
    Failed(String),
    /// Another refresh was in flight, or the loader was disposed
    Skipped,
}

pub struct DashboardDataLoader {
    source: Arc<dyn DashboardDataSource>,
    state: watch::Sender<LoaderState>,
    in_flight: AtomicBool,
    disposed: AtomicBool,
}

/// Ends a refresh cycle, including one whose future was dropped mid-way:
/// clears `loading` unless the loader was disposed, then releases the flag.
struct InFlight<'a>(&'a DashboardDataLoader);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let loader = self.0;
        if !loader.is_disposed() {
            loader
                .state
                .send_if_modified(|state| std::mem::replace(&mut state.loading, false));
        }
        loader.in_flight.store(false, Ordering::Release);
    }
}

impl DashboardDataLoader {
    pub fn new(source: Arc<dyn DashboardDataSource>) -> Self {
        let (state, _) = watch::channel(LoaderState::default());
        Self {
            source,
            state,
            in_flight: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LoaderState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> LoaderState {
        self.state.borrow().clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Stop accepting writes. Refreshes still in flight resolve into nothing.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    /// Fetch all four resources and replace the snapshot only if every fetch succeeded.
    pub async fn refresh(&self) -> RefreshOutcome {
        if self.is_disposed() {
            return RefreshOutcome::Skipped;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        }
        let _in_flight = InFlight(self);
        let started = Instant::now();

        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = try_join4(
            self.source.fetch_dashboard(),
            self.source.fetch_intel_feed(),
            self.source.fetch_agents(),
            self.source.fetch_alerts(),
        )
        .await;

        if self.is_disposed() {
            tracing::debug!("Loader disposed during refresh, dropping result");
            return RefreshOutcome::Skipped;
        }

        match result {
            Ok((dashboard, intel_feed, agents, alerts)) => {
                let snapshot = DashboardSnapshot::new(dashboard, intel_feed, agents, alerts);
                self.state.send_modify(|state| {
                    state.snapshot = Some(snapshot);
                    state.loading = false;
                    state.error = None;
                });
                tracing::info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Dashboard snapshot refreshed"
                );
                RefreshOutcome::Updated
            }
            Err(e) => {
                let message = format!("Failed to load dashboard: {}", e);
                tracing::error!(status = ?e.status(), "Dashboard fetch error: {}", e);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(message.clone());
                });
                RefreshOutcome::Failed(message)
            }
        }
    }

    /// User-initiated retry. Leaves any running poll timer alone.
    pub async fn retry(&self) -> RefreshOutcome {
        tracing::info!("Manual dashboard retry requested");
        self.refresh().await
    }
}
