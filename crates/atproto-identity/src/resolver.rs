use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{IdentityError, Result};
use crate::types::{is_did, Identity, MiniDocResponse, Resolution};

const DEFAULT_SERVICE_URL: &str = "https://slingshot.microcosm.blue";
const RESOLVE_MINI_DOC: &str = "com.bad-example.identity.resolveMiniDoc";

/// Strip whitespace and a leading `@` from user-typed identifiers
pub fn normalize_identifier(identifier: &str) -> &str {
    let trimmed = identifier.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}

/// Resolves handles and DIDs to identities via a mini-doc service
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    client: Client,
    service_url: String,
}

impl IdentityResolver {
    /// Create a new resolver against the public Slingshot instance
    pub fn new() -> Self {
        Self::with_service_url(DEFAULT_SERVICE_URL)
    }

    /// Create a new resolver with a custom Slingshot URL
    pub fn with_service_url(service_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, service_url)
    }

    /// Create a resolver sharing an existing HTTP client
    pub fn with_client(client: Client, service_url: &str) -> Self {
        Self {
            client,
            service_url: service_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a handle or DID.
    ///
    /// A failed lookup for a DID degrades to [`Identity::degraded`]; a failed
    /// lookup for a handle is returned as an error since there is no DID to
    /// fall back on. Each call makes a single attempt.
    pub async fn resolve(&self, identifier: &str) -> Result<Resolution> {
        let identifier = normalize_identifier(identifier);

        match self.fetch_mini_doc(identifier).await {
            Ok(identity) => {
                debug!(identifier, did = %identity.did, handle = %identity.handle, "Resolved identity");
                Ok(Resolution::Resolved(identity))
            }
            Err(e) if is_did(identifier) => {
                warn!(did = identifier, error = %e, "Identity resolution failed, using placeholder");
                Ok(Resolution::Degraded(Identity::degraded(identifier)))
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_mini_doc(&self, identifier: &str) -> Result<Identity> {
        let url = format!(
            "{}/xrpc/{RESOLVE_MINI_DOC}?identifier={}",
            self.service_url,
            urlencoding::encode(identifier)
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(IdentityError::Status(response.status().as_u16()));
        }

        let doc: MiniDocResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))?;

        if doc.did.is_empty() {
            return Err(IdentityError::Decode("empty did".to_string()));
        }

        Ok(doc.into())
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}
