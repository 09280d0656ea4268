//! Line-oriented parser for the Prometheus text exposition format.

use super::metric::MetricDescriptor;

const COMMENT_MARKER: char = '#';

/// Parse an exposition payload into metric descriptors, in input order.
///
/// Never fails. Comment lines (`# HELP`, `# TYPE`, free-form `#`) and blank
/// lines are skipped; every other line contributes its first field as a
/// metric name. Duplicates are kept.
///
/// Leading whitespace is trimmed before the comment check, so an indented
/// `# HELP` line is still treated as metadata.
#[must_use]
pub fn parse(input: &str) -> Vec<MetricDescriptor> {
    input.lines().filter_map(parse_line).collect()
}

/// Parse a raw scrape body. Invalid UTF-8 is replaced rather than rejected.
#[must_use]
pub fn parse_bytes(payload: &[u8]) -> Vec<MetricDescriptor> {
    parse(&String::from_utf8_lossy(payload))
}

fn parse_line(line: &str) -> Option<MetricDescriptor> {
    let line = line.trim_start();
    if line.starts_with(COMMENT_MARKER) {
        return None;
    }

    // Remaining fields are the sample value and optional timestamp.
    let name = line.split_whitespace().next()?;
    MetricDescriptor::new(name)
}
