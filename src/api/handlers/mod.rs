//! HTTP request handlers.

pub mod account_handler;
pub mod dashboard_handler;

pub use account_handler::account_routes;
pub use dashboard_handler::dashboard_routes;
