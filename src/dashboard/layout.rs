//! Layout engine: converts a metric list into a dashboard document.

use super::model::{
    DASHBOARD_TITLE, DASHBOARD_UID, DashboardDocument, GridPosition, INITIAL_VERSION, PANEL_TYPE, PanelSpec,
    QueryTarget,
};
use crate::exposition::MetricDescriptor;

// Layout constants (Grafana grid units).
pub const PANEL_HEIGHT: usize = 8;
pub const PANEL_WIDTH: usize = 12;
pub const PANELS_PER_ROW: usize = 2;

/// Build a dashboard with one panel per metric, in input order.
///
/// Total over any input; an empty slice yields a document with no panels.
#[must_use]
pub fn render_dashboard(metrics: &[MetricDescriptor]) -> DashboardDocument {
    let panels = metrics
        .iter()
        .enumerate()
        .map(|(index, metric)| render_panel(index, metric))
        .collect();

    DashboardDocument {
        title: DASHBOARD_TITLE.to_owned(),
        panels,
        uid: DASHBOARD_UID.to_owned(),
        version: INITIAL_VERSION,
    }
}

/// Grid placement for the panel at zero-based `index`.
///
/// Fills left to right, top to bottom, two panels per row.
#[must_use]
pub fn grid_position(index: usize) -> GridPosition {
    GridPosition {
        h: PANEL_HEIGHT,
        w: PANEL_WIDTH,
        x: (index % PANELS_PER_ROW) * PANEL_WIDTH,
        y: (index / PANELS_PER_ROW).saturating_mul(PANEL_HEIGHT),
    }
}

fn render_panel(index: usize, metric: &MetricDescriptor) -> PanelSpec {
    PanelSpec {
        title: metric.name().to_owned(),
        panel_type: PANEL_TYPE.to_owned(),
        targets: vec![QueryTarget { expr: metric.name().to_owned() }],
        grid_pos: grid_position(index),
    }
}
