use atproto_identity::{Identity, IdentityResolver};
use atproto_records::{Profile, RecordClient};
use serde::Serialize;

/// Everything known about an account: identity plus optional profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub identity: Identity,
    pub profile: Option<Profile>,
}

/// Resolves an identifier to an [`Actor`]
#[derive(Debug, Clone)]
pub struct ActorResolver {
    identity: IdentityResolver,
    records: RecordClient,
}

impl ActorResolver {
    pub fn new(identity: IdentityResolver, records: RecordClient) -> Self {
        Self { identity, records }
    }

    /// Resolve the identity, then fetch its profile.
    ///
    /// Fails only when the identity cannot be resolved; a missing profile
    /// yields `profile: None`.
    pub async fn resolve_actor(&self, identifier: &str) -> atproto_identity::Result<Actor> {
        let identity = self.identity.resolve(identifier).await?.into_identity();
        let profile = self.records.fetch_profile(&identity.did).await;

        Ok(Actor { identity, profile })
    }
}
