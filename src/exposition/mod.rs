//! Prometheus text-exposition parser.
//!
//! Reduces a scrape body to the ordered list of metric identities it mentions.
//! Sample values, timestamps and `#` metadata lines are dropped; only the first
//! whitespace-delimited field of each sample line survives.

pub mod dedup;
pub mod metric;
pub mod parse;

pub use dedup::dedup_by_name;
pub use metric::{MetricDescriptor, MetricKind};
pub use parse::{parse, parse_bytes};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
