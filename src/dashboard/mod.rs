//! Grafana dashboard model and grid layout.
//!
//! Maps an ordered metric list onto a dashboard document: one time-series panel
//! per metric, tiled two per row. Placement depends only on a panel's index, so
//! the same metric order always produces the same document.

pub mod layout;
pub mod model;

pub use layout::{grid_position, render_dashboard};
pub use model::{DashboardDocument, GridPosition, PanelSpec, QueryTarget};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
