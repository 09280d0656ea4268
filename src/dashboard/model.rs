//! Dashboard document types, serialized in Grafana's JSON shape.

use serde::{Deserialize, Serialize};

pub const DASHBOARD_TITLE: &str = "Auto-Generated Dashboard";
pub const DASHBOARD_UID: &str = "auto-generated-dashboard";
/// Every regeneration starts over at this version; callers own any bumping.
pub const INITIAL_VERSION: u32 = 1;
pub const PANEL_TYPE: &str = "timeseries";

/// A complete dashboard definition.
///
/// Field order matches the emitted JSON: `title`, `panels`, `uid`, `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDocument {
    pub title: String,
    pub panels: Vec<PanelSpec>,
    pub uid: String,
    pub version: u32,
}

/// One visualization panel bound to a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub title: String,
    #[serde(rename = "type")]
    pub panel_type: String,
    pub targets: Vec<QueryTarget>,
    #[serde(rename = "gridPos")]
    pub grid_pos: GridPosition,
}

/// A query expression attached to a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTarget {
    pub expr: String,
}

/// Panel rectangle in Grafana grid units (24 columns wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub h: usize,
    pub w: usize,
    pub x: usize,
    pub y: usize,
}
