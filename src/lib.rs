pub mod common;
pub mod config;
pub mod error;
pub mod opentsdb;

#[cfg(test)]
mod tests;

pub use config::{BodyFraming, Settings, ValuePolicy};
pub use error::{ConvertError, ConvertResult};
pub use opentsdb::{
    decode_generic, extract_series, ConvertedResponse, Converter, MetricDescriptorsResponse,
    ResponseConverter, ResponseTarget, SeriesOutcome, TimeSeriesResult,
};
