//! Errors that can happen when talking to the remote APIs

use std::error::Error;
use std::fmt::{Display, Formatter};

use reqwest::StatusCode;

/// Why a remote source could not provide its data
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent, or it timed out
    Network(reqwest::Error),
    /// The server answered with a non-success HTTP status
    Status(StatusCode),
    /// The server answered, but the body does not contain what we expected
    Malformed(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            _ => false,
        }
    }

    pub fn is_malformed(&self) -> bool {
        match self {
            FetchError::Malformed(_) => true,
            _ => false,
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(err) => write!(f, "network failure: {}", err),
            FetchError::Status(status) => write!(f, "unexpected HTTP status code {:?}", status),
            FetchError::Malformed(details) => write!(f, "malformed response: {}", details),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}
