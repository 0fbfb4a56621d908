use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::common::{millis_delta_to_secs, millis_to_datetime, MILLIS_PER_SECOND};
use crate::common::types::{Sample, Timestamp};

/// One named, tagged series from an OpenTSDB query, laid out on an inferred regular grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResult {
    pub metric_name: String,
    /// Epoch millis of the first sample.
    pub start_time_millis: Timestamp,
    /// Interval between the first two samples in whole seconds, or 0 with fewer than two samples.
    pub step_secs: i64,
    /// `start_time_millis + values.len() * step_secs * 1000`. This is one step past the last
    /// sample, not the last sample itself.
    pub end_time_millis: Timestamp,
    pub tags: AHashMap<String, String>,
    pub values: Vec<f64>,
}

impl TimeSeriesResult {
    /// Builds a series from the millis timestamps of its first two samples (if present) and its
    /// values in sample order. Returns `None` if the step or end marker overflows a `Timestamp`.
    pub fn new(
        metric_name: String,
        tags: AHashMap<String, String>,
        first_two: (Timestamp, Option<Timestamp>),
        values: Vec<f64>,
    ) -> Option<Self> {
        let (start_time_millis, second) = first_two;
        let step_secs = match second {
            Some(second) if values.len() > 1 => millis_delta_to_secs(start_time_millis, second)?,
            _ => 0,
        };
        let end_time_millis = i64::try_from(values.len())
            .ok()?
            .checked_mul(step_secs)?
            .checked_mul(MILLIS_PER_SECOND)?
            .checked_add(start_time_millis)?;
        Some(TimeSeriesResult {
            metric_name,
            start_time_millis,
            step_secs,
            end_time_millis,
            tags,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(|v| v.as_str())
    }

    pub fn step_millis(&self) -> i64 {
        self.step_secs * MILLIS_PER_SECOND
    }

    /// Timestamps of the inferred grid, one per value.
    pub fn timestamps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        let start = self.start_time_millis;
        let step = self.step_millis();
        (0..self.values.len()).map(move |i| start + i as i64 * step)
    }

    /// Values paired with their grid timestamps.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps()
            .zip(self.values.iter())
            .map(|(timestamp, value)| Sample::new(timestamp, *value))
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.start_time_millis)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.end_time_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_tags() -> AHashMap<String, String> {
        let mut tags = AHashMap::new();
        tags.insert("host".to_string(), "a".to_string());
        tags
    }

    #[test]
    fn single_sample_has_no_step() {
        let series = TimeSeriesResult::new("cpu".to_string(), host_tags(), (5_000, None), vec![1.0])
            .unwrap();
        assert_eq!(series.step_secs, 0);
        assert_eq!(series.end_time_millis, series.start_time_millis);
    }

    #[test]
    fn end_time_counts_every_sample() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            host_tags(),
            (1_000_000, Some(1_010_000)),
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert_eq!(series.step_secs, 10);
        assert_eq!(series.end_time_millis, 1_030_000);
    }

    #[test]
    fn step_truncates_sub_second_gaps() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            AHashMap::new(),
            (1_000_000, Some(1_001_500)),
            vec![1.0, 2.0],
        )
        .unwrap();
        assert_eq!(series.step_secs, 1);
        assert_eq!(series.end_time_millis, 1_002_000);
    }

    #[test]
    fn samples_follow_the_inferred_grid() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            host_tags(),
            (1_000_000, Some(1_010_000)),
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        let samples: Vec<Sample> = series.samples().collect();
        assert_eq!(
            samples,
            vec![
                Sample::new(1_000_000, 1.0),
                Sample::new(1_010_000, 2.0),
                Sample::new(1_020_000, 3.0),
            ]
        );
        assert_eq!(series.tag("host"), Some("a"));
        assert_eq!(series.tag("metric"), None);
        assert_eq!(series.start_time().unwrap().timestamp(), 1000);
        assert_eq!(series.end_time().unwrap().timestamp(), 1030);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let series = TimeSeriesResult::new("cpu".to_string(), host_tags(), (1_000, None), vec![0.5])
            .unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["metricName"], "cpu");
        assert_eq!(json["startTimeMillis"], 1_000);
        assert_eq!(json["stepSecs"], 0);
        assert_eq!(json["endTimeMillis"], 1_000);
        assert_eq!(json["tags"]["host"], "a");
        assert_eq!(json["values"][0], 0.5);
    }

    #[test]
    fn overflowing_step_is_rejected() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            AHashMap::new(),
            (-9_000_000_000_000_000_000, Some(9_000_000_000_000_000_000)),
            vec![1.0, 2.0],
        );
        assert_eq!(series, None);
    }

    #[test]
    fn overflowing_end_marker_is_rejected() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            AHashMap::new(),
            (0, Some(9_000_000_000_000_000_000)),
            vec![1.0, 2.0, 3.0],
        );
        assert_eq!(series, None);
    }

    #[test]
    fn end_marker_may_sit_right_below_the_max() {
        let series = TimeSeriesResult::new(
            "cpu".to_string(),
            AHashMap::new(),
            (i64::MAX - 20_000, Some(i64::MAX - 10_000)),
            vec![1.0, 2.0],
        )
        .unwrap();
        assert_eq!(series.end_time_millis, i64::MAX);
    }
}
