//! Error types for identity resolution

use std::fmt;

/// Errors from the identity resolution service
#[derive(Debug)]
pub enum IdentityError {
    /// Transport-level failure (connect, timeout, body read)
    Http(reqwest::Error),
    /// Service answered with a non-success status
    Status(u16),
    /// Response body was not a usable mini-doc
    Decode(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status(code) => write!(f, "Identity service returned status {code}"),
            Self::Decode(msg) => write!(f, "Invalid identity response: {msg}"),
        }
    }
}

impl std::error::Error for IdentityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
