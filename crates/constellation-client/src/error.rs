use std::fmt;

/// Errors from the Constellation client
#[derive(Debug)]
pub enum ConstellationError {
    Http(reqwest::Error),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ConstellationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Constellation HTTP error: {e}"),
            Self::Status(code) => write!(f, "Constellation returned status {code}"),
            Self::Decode(msg) => write!(f, "Constellation response error: {msg}"),
        }
    }
}

impl std::error::Error for ConstellationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConstellationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, ConstellationError>;
