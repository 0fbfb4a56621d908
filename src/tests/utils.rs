use std::io::Cursor;
use crate::config::{BodyFraming, Settings, ValuePolicy};
use crate::error::ConvertResult;
use crate::opentsdb::{
    ConvertedResponse, Converter, ResponseConverter, ResponseTarget, SeriesOutcome,
};

pub fn build_converter(body_framing: BodyFraming, value_policy: ValuePolicy) -> ResponseConverter {
    ResponseConverter::new(
        Settings::default()
            .with_body_framing(body_framing)
            .with_value_policy(value_policy),
    )
}

pub fn convert(
    converter: &ResponseConverter,
    body: &str,
    target: ResponseTarget,
) -> ConvertResult<ConvertedResponse> {
    let mut reader = Cursor::new(body.as_bytes());
    converter.from_body(&mut reader, target)
}

pub fn convert_series(body: &str) -> ConvertResult<SeriesOutcome> {
    ResponseConverter::default().convert_str(body)
}
