use std::io::{BufRead, BufReader, Read};
use ahash::AHashMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};
use crate::common::METRIC_NAME_TAG;
use crate::common::parse::{parse_sample_value, parse_timestamp_secs, value_text};
use crate::common::types::Timestamp;
use crate::config::{BodyFraming, Settings, ValuePolicy};
use crate::error::{ConvertError, ConvertResult};
use super::{ConvertedResponse, ResponseTarget, SeriesOutcome, TimeSeriesResult};

/// Converter turns a raw OpenTSDB response body into the entity the caller asked for.
pub trait Converter {
    /// from_body reads `body` to the end (or per the configured framing) and decodes it
    /// according to `target`.
    fn from_body(
        &self,
        body: &mut dyn Read,
        target: ResponseTarget,
    ) -> ConvertResult<ConvertedResponse>;
}

/// Decodes any serde type straight from the body, with no OpenTSDB specific handling.
pub fn decode_generic<T: DeserializeOwned, R: Read>(body: R) -> ConvertResult<T> {
    Ok(serde_json::from_reader(body)?)
}

/// Extracts series from an already decoded `/api/query` response with default settings.
pub fn extract_series(decoded: &Value) -> ConvertResult<SeriesOutcome> {
    ResponseConverter::default().extract(decoded)
}

#[derive(Clone, Debug, Default)]
pub struct ResponseConverter {
    settings: Settings,
}

impl Converter for ResponseConverter {
    fn from_body(
        &self,
        body: &mut dyn Read,
        target: ResponseTarget,
    ) -> ConvertResult<ConvertedResponse> {
        match target {
            ResponseTarget::Descriptors => decode_generic(body).map(ConvertedResponse::Descriptors),
            ResponseTarget::Series => self.convert_series(body).map(ConvertedResponse::Series),
        }
    }
}

impl ResponseConverter {
    pub fn new(settings: Settings) -> Self {
        ResponseConverter { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn convert_series(&self, body: &mut dyn Read) -> ConvertResult<SeriesOutcome> {
        let json = self.read_body(body)?;
        self.convert_str(&json)
    }

    pub fn convert_str(&self, json: &str) -> ConvertResult<SeriesOutcome> {
        let decoded: Value = serde_json::from_str(json)?;
        self.extract(&decoded)
    }

    fn read_body(&self, body: &mut dyn Read) -> ConvertResult<String> {
        let mut json = String::new();
        match self.settings.body_framing {
            BodyFraming::Full => {
                body.read_to_string(&mut json)?;
            }
            BodyFraming::FirstLine => {
                BufReader::new(body).read_line(&mut json)?;
            }
        }
        Ok(json)
    }

    /// Walks `data.result` and converts every entry. Any shape error aborts the whole
    /// response; value errors do too unless the value policy is lenient.
    pub fn extract(&self, decoded: &Value) -> ConvertResult<SeriesOutcome> {
        let entries = result_entries(decoded)?;
        if entries.is_empty() {
            warn!("received no data from opentsdb");
            return Ok(SeriesOutcome::NoData);
        }

        let lenient = self.settings.value_policy == ValuePolicy::Lenient;
        let mut series = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            match convert_entry(entry, i) {
                Ok(ts) => {
                    trace!(
                        metric = %ts.metric_name,
                        samples = ts.len(),
                        step_secs = ts.step_secs,
                        "converted series"
                    );
                    series.push(ts);
                }
                Err(err) if lenient && err.is_value() => {
                    warn!("skipping opentsdb series {}: {}", i, err);
                }
                Err(err) => return Err(err),
            }
        }

        debug!("converted {} of {} opentsdb series", series.len(), entries.len());
        Ok(SeriesOutcome::Series(series))
    }
}

fn result_entries(decoded: &Value) -> ConvertResult<&Vec<Value>> {
    let data = decoded
        .as_object()
        .ok_or_else(|| ConvertError::shape("$", "an object"))?
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| ConvertError::shape("data", "an object"))?;
    data.get("result")
        .and_then(Value::as_array)
        .ok_or_else(|| ConvertError::shape("data.result", "a list"))
}

fn convert_entry(entry: &Value, index: usize) -> ConvertResult<TimeSeriesResult> {
    let path = format!("data.result[{index}]");
    let entry = entry
        .as_object()
        .ok_or_else(|| ConvertError::shape(path.as_str(), "an object"))?;

    let (metric_name, tags) = split_metric_tags(entry, &path)?;

    let dps_path = format!("{path}.dps");
    let dps = entry
        .get("dps")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ConvertError::shape(dps_path.as_str(), "a list of [timestamp, value] pairs")
        })?;
    if dps.is_empty() {
        return Err(ConvertError::shape(dps_path, "at least one data point"));
    }

    let mut timestamps = Vec::with_capacity(2);
    let mut values = Vec::with_capacity(dps.len());
    for (i, dp) in dps.iter().enumerate() {
        let (ts, value) = match dp.as_array().map(Vec::as_slice) {
            Some([ts, value, ..]) => (ts, value),
            _ => {
                let path = format!("{dps_path}[{i}]");
                return Err(ConvertError::shape(path, "a [timestamp, value] pair"));
            }
        };
        // only the first two timestamps are needed to lay out the grid
        if i < 2 {
            timestamps.push(parse_timestamp(ts, || format!("{dps_path}[{i}][0]"))?);
        }
        let value = parse_sample_value(value).ok_or_else(|| {
            ConvertError::value(format!("{dps_path}[{i}][1]"), value_text(value))
        })?;
        values.push(value);
    }

    let first_two = (timestamps[0], timestamps.get(1).copied());
    // the grid can only overflow once a second timestamp sets a step
    TimeSeriesResult::new(metric_name, tags, first_two, values).ok_or_else(|| {
        let second = dps.get(1).and_then(|dp| dp.get(0)).map(value_text).unwrap_or_default();
        ConvertError::value(format!("{dps_path}[1][0]"), second)
    })
}

/// The metric name travels inside the tag mapping under `metric`. Returns it separately from a
/// fresh tag map that excludes it.
fn split_metric_tags(
    entry: &Map<String, Value>,
    path: &str,
) -> ConvertResult<(String, AHashMap<String, String>)> {
    let metric_path = format!("{path}.metric");
    let metric = entry
        .get("metric")
        .and_then(Value::as_object)
        .ok_or_else(|| ConvertError::shape(metric_path.as_str(), "an object of tags"))?;

    let mut metric_name = None;
    let mut tags = AHashMap::with_capacity(metric.len().saturating_sub(1));
    for (key, value) in metric {
        let value = value
            .as_str()
            .ok_or_else(|| ConvertError::shape(format!("{metric_path}.{key}"), "a string"))?;
        if key == METRIC_NAME_TAG {
            metric_name = Some(value.to_string());
        } else {
            tags.insert(key.clone(), value.to_string());
        }
    }

    let metric_name = metric_name.ok_or_else(|| {
        ConvertError::shape(format!("{metric_path}.{METRIC_NAME_TAG}"), "a metric name")
    })?;
    Ok((metric_name, tags))
}

fn parse_timestamp(value: &Value, path: impl FnOnce() -> String) -> ConvertResult<Timestamp> {
    parse_timestamp_secs(value).ok_or_else(|| ConvertError::value(path(), value_text(value)))
}
