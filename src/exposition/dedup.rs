//! Optional dedup policy applied on top of the parser output.

use std::collections::HashSet;

use super::metric::MetricDescriptor;

/// Keep the first occurrence of each metric name, preserving order.
#[must_use]
pub fn dedup_by_name(metrics: Vec<MetricDescriptor>) -> Vec<MetricDescriptor> {
    let mut seen: HashSet<String> = HashSet::with_capacity(metrics.len());
    metrics
        .into_iter()
        .filter(|metric| seen.insert(metric.name().to_owned()))
        .collect()
}
