// Domain layer - Snapshot, health and view models
pub mod health;
pub mod indicators;
pub mod snapshot;
pub mod view;
