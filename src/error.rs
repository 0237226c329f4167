//! Errors surfaced by directions backends.

use std::fmt;

use crate::traits::TransportMode;

#[derive(Debug)]
pub enum DirectionsError {
    /// Transport or decoding failure talking to the backend.
    Http(reqwest::Error),
    /// The backend answered with a non-success code.
    Status { code: String, message: Option<String> },
    /// The backend answered successfully but without any candidate path.
    NoRoute,
    UnsupportedMode(TransportMode),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(err) => write!(f, "directions request failed: {}", err),
            DirectionsError::Status { code, message: Some(message) } => {
                write!(f, "directions backend returned {}: {}", code, message)
            }
            DirectionsError::Status { code, message: None } => {
                write!(f, "directions backend returned {}", code)
            }
            DirectionsError::NoRoute => write!(f, "no route between the requested points"),
            DirectionsError::UnsupportedMode(mode) => {
                write!(f, "transport mode {:?} is not supported", mode)
            }
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}
