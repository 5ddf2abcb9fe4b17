use crate::providers::hetzner::types::Zone;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HetznerError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Did not get expected HTTP 200 but {status}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Domain {apex} did not yield exactly 1 zone result but {}", .zones.len())]
    AmbiguousZone { apex: String, zones: Vec<Zone> },
}

use crate::error::Error;

pub fn map_error(e: HetznerError) -> Error {
    use HetznerError::*;
    match e {
        Transport(err) => Error::TransportError(err.to_string()),
        UnexpectedStatus { status, body } => Error::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
        Decode(err) => Error::DecodeError(err.to_string()),
        AmbiguousZone { apex, zones } => Error::AmbiguousZone {
            apex,
            count: zones.len(),
        },
    }
}
