// Presentation layer - Local JSON surface for the dashboard view
pub mod app_state;
pub mod handlers;
