//! Tests for the dashboard layout engine and its JSON shape.

use super::model::{DASHBOARD_TITLE, DASHBOARD_UID, INITIAL_VERSION, PANEL_TYPE};
use super::{GridPosition, grid_position, render_dashboard};
use crate::exposition::{MetricDescriptor, parse};

fn metrics(names: &[&str]) -> Vec<MetricDescriptor> {
    names
        .iter()
        .map(|name| MetricDescriptor::new(name).expect("valid metric name"))
        .collect()
}

// =============================================================================
// GRID TESTS
// =============================================================================

#[test]
fn grid_first_row() {
    assert_eq!(grid_position(0), GridPosition { h: 8, w: 12, x: 0, y: 0 });
    assert_eq!(grid_position(1), GridPosition { h: 8, w: 12, x: 12, y: 0 });
}

#[test]
fn grid_third_row_starts_at_index_four() {
    assert_eq!(grid_position(4), GridPosition { h: 8, w: 12, x: 0, y: 16 });
    assert_eq!(grid_position(5), GridPosition { h: 8, w: 12, x: 12, y: 16 });
}

#[test]
fn grid_formula_holds_over_range() {
    for i in 0..1000 {
        let pos = grid_position(i);
        assert!(pos.x == 0 || pos.x == 12, "index {i} x={}", pos.x);
        assert_eq!(pos.x, (i % 2) * 12);
        assert_eq!(pos.y, 8 * (i / 2));
        assert_eq!((pos.h, pos.w), (8, 12));
    }
}

#[test]
fn grid_positions_never_collide() {
    let mut seen = std::collections::HashSet::new();
    for i in 0..500 {
        let pos = grid_position(i);
        assert!(seen.insert((pos.x, pos.y)), "collision at index {i}");
    }
}

#[test]
fn grid_huge_index_saturates_instead_of_overflowing() {
    let pos = grid_position(usize::MAX);
    assert_eq!(pos.x, 12);
    assert_eq!(pos.y, usize::MAX);
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn render_two_metrics() {
    let doc = render_dashboard(&parse("foo 1\nbar 2\n"));
    assert_eq!(doc.panels.len(), 2);
    assert_eq!(doc.panels[0].title, "foo");
    assert_eq!((doc.panels[0].grid_pos.x, doc.panels[0].grid_pos.y), (0, 0));
    assert_eq!(doc.panels[1].title, "bar");
    assert_eq!((doc.panels[1].grid_pos.x, doc.panels[1].grid_pos.y), (12, 0));
}

#[test]
fn render_panel_fields_follow_metric() {
    let doc = render_dashboard(&metrics(&["process_cpu_seconds_total"]));
    let panel = &doc.panels[0];
    assert_eq!(panel.title, "process_cpu_seconds_total");
    assert_eq!(panel.panel_type, PANEL_TYPE);
    assert_eq!(panel.targets.len(), 1);
    assert_eq!(panel.targets[0].expr, "process_cpu_seconds_total");
}

#[test]
fn render_five_metrics_wraps_to_third_row() {
    let doc = render_dashboard(&metrics(&["a", "b", "c", "d", "e"]));
    assert_eq!(doc.panels.len(), 5);
    assert_eq!(doc.panels[4].grid_pos, GridPosition { h: 8, w: 12, x: 0, y: 16 });
}

#[test]
fn render_preserves_order_and_duplicates() {
    let input = metrics(&["z", "a", "z", "m"]);
    let doc = render_dashboard(&input);
    let titles: Vec<&str> = doc.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["z", "a", "z", "m"]);
}

#[test]
fn render_empty_has_no_panels() {
    let doc = render_dashboard(&[]);
    assert!(doc.panels.is_empty());
    assert_eq!(doc.title, DASHBOARD_TITLE);
    assert_eq!(doc.uid, DASHBOARD_UID);
    assert_eq!(doc.version, INITIAL_VERSION);
}

#[test]
fn render_constants_do_not_depend_on_input() {
    let empty = render_dashboard(&[]);
    let full = render_dashboard(&metrics(&["a", "b", "c"]));
    assert_eq!(empty.title, full.title);
    assert_eq!(empty.uid, full.uid);
    assert_eq!(empty.version, full.version);
}

#[test]
fn render_is_deterministic() {
    let input = metrics(&["a", "b", "c"]);
    let first = serde_json::to_string_pretty(&render_dashboard(&input)).expect("encode");
    let second = serde_json::to_string_pretty(&render_dashboard(&input)).expect("encode");
    assert_eq!(first, second);
}

// =============================================================================
// JSON SHAPE TESTS
// =============================================================================

#[test]
fn json_empty_dashboard() {
    let rendered = serde_json::to_string_pretty(&render_dashboard(&[])).expect("encode");
    let expected = r#"{
  "title": "Auto-Generated Dashboard",
  "panels": [],
  "uid": "auto-generated-dashboard",
  "version": 1
}"#;
    assert_eq!(rendered, expected);
}

#[test]
fn json_single_panel_layout() {
    let rendered = serde_json::to_string_pretty(&render_dashboard(&metrics(&["foo"]))).expect("encode");
    let expected = r#"{
  "title": "Auto-Generated Dashboard",
  "panels": [
    {
      "title": "foo",
      "type": "timeseries",
      "targets": [
        {
          "expr": "foo"
        }
      ],
      "gridPos": {
        "h": 8,
        "w": 12,
        "x": 0,
        "y": 0
      }
    }
  ],
  "uid": "auto-generated-dashboard",
  "version": 1
}"#;
    assert_eq!(rendered, expected);
}

#[test]
fn json_has_exactly_the_expected_keys() {
    let value = serde_json::to_value(render_dashboard(&metrics(&["foo", "bar"]))).expect("encode");
    let top = value.as_object().expect("object");
    let mut keys: Vec<&str> = top.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["panels", "title", "uid", "version"]);

    let panel = value["panels"][1].as_object().expect("panel object");
    let mut panel_keys: Vec<&str> = panel.keys().map(String::as_str).collect();
    panel_keys.sort_unstable();
    assert_eq!(panel_keys, vec!["gridPos", "targets", "title", "type"]);
    assert_eq!(value["panels"][1]["gridPos"]["x"], 12);
    assert_eq!(value["panels"][1]["targets"][0]["expr"], "bar");
}
