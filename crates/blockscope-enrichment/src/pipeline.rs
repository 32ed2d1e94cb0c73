use atproto_identity::IdentityResolver;
use atproto_records::RecordClient;
use chrono::{DateTime, Utc};
use constellation_client::{BlockList, BlockRecord, ConstellationClient};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info};

use crate::actor::{Actor, ActorResolver};
use crate::error::Result;

/// A block with best-effort blocker and timestamp details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBlockRecord {
    #[serde(flatten)]
    pub record: BlockRecord,
    /// Blocker, `None` when their identity could not be resolved
    pub actor: Option<Actor>,
    /// Block record `createdAt`, `None` when the record could not be read
    pub created_at: Option<DateTime<Utc>>,
}

/// Output of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    pub target: Actor,
    pub block_list: BlockList,
    /// Same length and order as `block_list.records`
    pub enriched: Vec<EnrichedBlockRecord>,
}

/// Resolves an account and enriches the blocks against it
#[derive(Debug, Clone)]
pub struct BlockPipeline {
    actors: ActorResolver,
    records: RecordClient,
    backlinks: ConstellationClient,
}

impl BlockPipeline {
    pub fn new(actors: ActorResolver, records: RecordClient, backlinks: ConstellationClient) -> Self {
        Self {
            actors,
            records,
            backlinks,
        }
    }

    /// Build a pipeline whose clients share one HTTP client.
    ///
    /// Identity and record lookups go to `slingshot_url`, backlink queries
    /// to `constellation_url`.
    pub fn connect(client: reqwest::Client, slingshot_url: &str, constellation_url: &str) -> Self {
        let records = RecordClient::with_client(client.clone(), slingshot_url);
        let identity = IdentityResolver::with_client(client.clone(), slingshot_url);
        let backlinks = ConstellationClient::with_client(client, constellation_url);

        Self::new(ActorResolver::new(identity, records.clone()), records, backlinks)
    }

    /// Resolve `identifier`, fetch the blocks against it and enrich each one.
    ///
    /// Blocks are enriched concurrently; the result keeps the index order.
    pub async fn run(&self, identifier: &str) -> Result<PipelineResult> {
        let target = self.actors.resolve_actor(identifier).await?;
        let block_list = self.backlinks.fetch_blocks(&target.identity.did).await?;

        let enriched = join_all(block_list.records.iter().map(|record| self.enrich(record))).await;

        info!(
            identifier,
            did = %target.identity.did,
            total = block_list.total,
            enriched = enriched.len(),
            unresolved = enriched.iter().filter(|e| e.actor.is_none()).count(),
            "Enriched block list"
        );

        Ok(PipelineResult {
            target,
            block_list,
            enriched,
        })
    }

    async fn enrich(&self, record: &BlockRecord) -> EnrichedBlockRecord {
        let (actor, created_at) = futures::join!(
            self.actors.resolve_actor(&record.blocker_did),
            self.records
                .fetch_record_timestamp(&record.blocker_did, &record.collection, &record.rkey),
        );

        let actor = match actor {
            Ok(actor) => Some(actor),
            Err(e) => {
                debug!(did = %record.blocker_did, error = %e, "Could not resolve blocker");
                None
            }
        };

        EnrichedBlockRecord {
            record: record.clone(),
            actor,
            created_at,
        }
    }
}
