//! Prometheus exposition to Grafana dashboard generator.
//!
//! The transform core (`exposition` then `dashboard`) is infallible and does no
//! I/O. Fetching (`fetch`) and writing (`output`) are the only fallible steps.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod exposition;
pub mod fetch;
pub mod output;

pub use dashboard::DashboardDocument;
pub use error::AppError;

/// Parse a raw scrape body and lay it out as a dashboard.
#[must_use]
pub fn generate(payload: &[u8]) -> DashboardDocument {
    dashboard::render_dashboard(&exposition::parse_bytes(payload))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
