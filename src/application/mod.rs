// Application layer - Loading, polling and probing use cases
pub mod actions;
pub mod data_source;
pub mod health_probe;
pub mod loader;
pub mod poller;

#[cfg(test)]
pub mod testing;
