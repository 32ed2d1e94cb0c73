use std::fmt;

use atproto_identity::IdentityError;
use constellation_client::ConstellationError;

/// Failures that abort a pipeline run
#[derive(Debug)]
pub enum PipelineError {
    /// The target identifier could not be resolved to a DID
    Resolution(IdentityError),
    /// The block list could not be fetched
    BlockList(ConstellationError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(e) => write!(f, "Could not resolve identifier: {e}"),
            Self::BlockList(e) => write!(f, "Could not fetch block list: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolution(e) => Some(e),
            Self::BlockList(e) => Some(e),
        }
    }
}

impl From<IdentityError> for PipelineError {
    fn from(err: IdentityError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ConstellationError> for PipelineError {
    fn from(err: ConstellationError) -> Self {
        Self::BlockList(err)
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
