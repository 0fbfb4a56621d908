use thiserror::Error;

#[derive(Debug, Clone, Error, Eq, PartialEq)]
/// Enum for the ways converting an OpenTSDB response can fail.
pub enum ConvertError {
  #[error("Failed to read response body. {0}")]
  Transport(String),

  #[error("Cannot decode response. {0}")]
  Decode(String),

  #[error("Unexpected response shape at `{path}`: expected {expected}.")]
  Shape { path: String, expected: &'static str },

  #[error("Invalid number at `{path}`: {value}")]
  Value { path: String, value: String },
}

impl ConvertError {
  pub fn shape(path: impl Into<String>, expected: &'static str) -> Self {
    ConvertError::Shape { path: path.into(), expected }
  }

  pub fn value(path: impl Into<String>, value: impl Into<String>) -> Self {
    ConvertError::Value { path: path.into(), value: value.into() }
  }

  pub fn is_shape(&self) -> bool {
    matches!(self, ConvertError::Shape { .. })
  }

  pub fn is_value(&self) -> bool {
    matches!(self, ConvertError::Value { .. })
  }
}

impl From<std::io::Error> for ConvertError {
  fn from(err: std::io::Error) -> Self {
    ConvertError::Transport(err.to_string())
  }
}

impl From<serde_json::Error> for ConvertError {
  fn from(err: serde_json::Error) -> Self {
    if err.is_io() {
      ConvertError::Transport(err.to_string())
    } else {
      ConvertError::Decode(err.to_string())
    }
  }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
