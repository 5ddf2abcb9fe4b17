use std::fmt;

/// Errors surfaced to the host by `Solver` operations.
#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    ConfigError(String),
    TransportError(String),
    UnexpectedStatus { status: u16, body: String },
    DecodeError(String),
    AmbiguousZone { apex: String, count: usize },
    NotFound(String),
    Other(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Error::TransportError(msg) => write!(f, "Transport error: {msg}"),
            Error::UnexpectedStatus { status, body } => {
                write!(f, "Did not get expected HTTP 200 but {status}: {body}")
            }
            Error::DecodeError(msg) => write!(f, "Error decoding JSON: {msg}"),
            Error::AmbiguousZone { apex, count } => write!(
                f,
                "Domain {apex} did not yield exactly 1 zone result but {count}"
            ),
            Error::NotFound(msg) => write!(f, "Not found: {msg}"),
            Error::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}
