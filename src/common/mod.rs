mod time;
pub mod types;
pub(crate) mod parse;

pub use time::*;

/// Key inside a series' tag mapping that carries the metric name.
pub static METRIC_NAME_TAG: &str = "metric";
