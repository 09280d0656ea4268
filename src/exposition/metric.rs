//! Metric descriptor types produced by the exposition parser.

/// Metric type tag.
///
/// `# TYPE` lines are not consumed, so every metric is reported as a gauge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricKind {
    #[default]
    Gauge,
}

/// One metric discovered in an exposition payload.
///
/// The name is never empty and never contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    name: String,
    kind: MetricKind,
}

impl MetricDescriptor {
    /// Build a descriptor with the default kind.
    ///
    /// Returns `None` when `name` is empty or contains whitespace.
    #[must_use]
    pub fn new(name: &str) -> Option<Self> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }
        Some(Self { name: name.to_owned(), kind: MetricKind::default() })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> MetricKind {
        self.kind
    }
}
