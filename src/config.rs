use std::fmt::Display;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const BODY_FRAMING_ENV: &str = "OPENTSDB_BODY_FRAMING";
pub const VALUE_POLICY_ENV: &str = "OPENTSDB_VALUE_POLICY";

/// How much of a series response body is handed to the JSON decoder.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyFraming {
    /// Read the whole body.
    #[default]
    Full,
    /// Read only the first line. Only safe when the backend never pretty-prints its output.
    FirstLine,
}

impl Display for BodyFraming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyFraming::Full => write!(f, "full"),
            BodyFraming::FirstLine => write!(f, "first-line"),
        }
    }
}

impl FromStr for BodyFraming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(BodyFraming::Full),
            "first-line" | "first_line" | "firstline" => Ok(BodyFraming::FirstLine),
            _ => Err(format!("invalid body framing: {}", s)),
        }
    }
}

/// What to do with a series whose samples or timestamps are not numeric.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValuePolicy {
    /// Fail the whole response.
    #[default]
    Strict,
    /// Drop the offending series and keep converting the rest.
    Lenient,
}

impl Display for ValuePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValuePolicy::Strict => write!(f, "strict"),
            ValuePolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValuePolicy::Strict),
            "lenient" => Ok(ValuePolicy::Lenient),
            _ => Err(format!("invalid value policy: {}", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub body_framing: BodyFraming,
    /// Only governs value errors. Shape errors always abort.
    pub value_policy: ValuePolicy,
}

impl Settings {
    /// Defaults, overridden by any parsable `OPENTSDB_*` environment variables.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Some(framing) = get_setting_from_env::<BodyFraming>(BODY_FRAMING_ENV) {
            settings.body_framing = framing;
        }
        if let Some(policy) = get_setting_from_env::<ValuePolicy>(VALUE_POLICY_ENV) {
            settings.value_policy = policy;
        }
        settings
    }

    pub fn with_body_framing(mut self, body_framing: BodyFraming) -> Self {
        self.body_framing = body_framing;
        self
    }

    pub fn with_value_policy(mut self, value_policy: ValuePolicy) -> Self {
        self.value_policy = value_policy;
        self
    }
}

fn get_setting_from_env<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
}
