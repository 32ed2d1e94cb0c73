use serde::{Deserialize, Serialize};

/// Handle reported when an identity's handle cannot be determined
pub const HANDLE_INVALID: &str = "handle.invalid";

const DID_PREFIX: &str = "did:";

/// Whether an identifier is already in canonical DID form
pub fn is_did(identifier: &str) -> bool {
    identifier.starts_with(DID_PREFIX)
}

/// Canonical identity of an AT Protocol account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub did: String,
    pub handle: String,
    /// PDS endpoint, empty when unknown
    pub pds: String,
    /// Multibase signing key, empty when unknown
    pub signing_key: String,
}

impl Identity {
    /// Placeholder identity for a DID whose resolution failed
    pub fn degraded(did: &str) -> Self {
        Self {
            did: did.to_string(),
            handle: HANDLE_INVALID.to_string(),
            pds: String::new(),
            signing_key: String::new(),
        }
    }
}

/// Outcome of a non-fatal resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The service returned a mini-doc for the identifier
    Resolved(Identity),
    /// The service failed but the identifier was a DID, so a placeholder was built
    Degraded(Identity),
}

impl Resolution {
    pub fn identity(&self) -> &Identity {
        match self {
            Self::Resolved(identity) | Self::Degraded(identity) => identity,
        }
    }

    pub fn into_identity(self) -> Identity {
        match self {
            Self::Resolved(identity) | Self::Degraded(identity) => identity,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

fn default_handle() -> String {
    HANDLE_INVALID.to_string()
}

/// Slingshot `resolveMiniDoc` response
#[derive(Debug, Deserialize)]
pub(crate) struct MiniDocResponse {
    pub(crate) did: String,
    #[serde(default = "default_handle")]
    pub(crate) handle: String,
    #[serde(default)]
    pub(crate) pds: String,
    #[serde(default, alias = "signingKey")]
    pub(crate) signing_key: String,
}

impl From<MiniDocResponse> for Identity {
    fn from(doc: MiniDocResponse) -> Self {
        Self {
            did: doc.did,
            handle: doc.handle,
            pds: doc.pds,
            signing_key: doc.signing_key,
        }
    }
}
