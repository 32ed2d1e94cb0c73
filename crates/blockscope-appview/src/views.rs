//! Response shapes for the front end
//!
//! Converts pipeline output into flat, camelCase JSON with CDN image URLs.
//! Types are exported to TypeScript via ts-rs.

use blockscope_enrichment::{Actor, EnrichedBlockRecord, ImageKind, PipelineResult};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ActorView {
    pub did: String,
    pub handle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub pds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub banner: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BlockView {
    pub uri: String,
    pub did: String,
    pub collection: String,
    pub rkey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub actor: Option<ActorView>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BlocksResponse {
    pub target: ActorView,
    #[ts(type = "number")]
    pub total: u64,
    pub truncated: bool,
    pub blocks: Vec<BlockView>,
}

impl From<&Actor> for ActorView {
    fn from(actor: &Actor) -> Self {
        let identity = &actor.identity;
        let profile = actor.profile.as_ref();

        Self {
            did: identity.did.clone(),
            handle: identity.handle.clone(),
            pds: Some(identity.pds.clone()).filter(|p| !p.is_empty()),
            display_name: profile.and_then(|p| p.display_name.clone()),
            description: profile.and_then(|p| p.description.clone()),
            avatar: profile
                .and_then(|p| p.avatar.as_ref())
                .map(|img| img.cdn_url(&identity.did, ImageKind::Avatar)),
            banner: profile
                .and_then(|p| p.banner.as_ref())
                .map(|img| img.cdn_url(&identity.did, ImageKind::Banner)),
        }
    }
}

impl From<&EnrichedBlockRecord> for BlockView {
    fn from(block: &EnrichedBlockRecord) -> Self {
        Self {
            uri: block.record.uri(),
            did: block.record.blocker_did.clone(),
            collection: block.record.collection.clone(),
            rkey: block.record.rkey.clone(),
            created_at: block.created_at.map(|ts| ts.to_rfc3339()),
            actor: block.actor.as_ref().map(ActorView::from),
        }
    }
}

impl From<&PipelineResult> for BlocksResponse {
    fn from(result: &PipelineResult) -> Self {
        Self {
            target: ActorView::from(&result.target),
            total: result.block_list.total,
            truncated: result.block_list.truncated,
            blocks: result.enriched.iter().map(BlockView::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use blockscope_enrichment::{
        BlockList, BlockRecord, Identity, ImageRef, Profile, HANDLE_INVALID,
    };
    use chrono::{TimeZone, Utc};

    use super::*;

    fn bob() -> Actor {
        Actor {
            identity: Identity {
                did: "did:plc:bob".to_string(),
                handle: "bob.example".to_string(),
                pds: "https://pds.example".to_string(),
                signing_key: "zBob".to_string(),
            },
            profile: Some(Profile {
                display_name: Some("Bob".to_string()),
                description: None,
                avatar: Some(ImageRef {
                    content_hash: "bafkreiavatar".to_string(),
                    media_type: "image/jpeg".to_string(),
                }),
                banner: None,
            }),
        }
    }

    fn record(did: &str, rkey: &str) -> BlockRecord {
        BlockRecord {
            blocker_did: did.to_string(),
            collection: "app.bsky.graph.block".to_string(),
            rkey: rkey.to_string(),
        }
    }

    #[test]
    fn test_actor_view_with_profile() {
        let view = ActorView::from(&bob());
        assert_eq!(view.handle, "bob.example");
        assert_eq!(view.pds.as_deref(), Some("https://pds.example"));
        assert_eq!(view.display_name.as_deref(), Some("Bob"));
        assert_eq!(
            view.avatar.as_deref(),
            Some("https://cdn.bsky.app/img/avatar/plain/did:plc:bob/bafkreiavatar@jpeg")
        );
        assert!(view.banner.is_none());
    }

    #[test]
    fn test_degraded_actor_view() {
        let actor = Actor {
            identity: Identity::degraded("did:plc:ghost"),
            profile: None,
        };
        let view = ActorView::from(&actor);
        assert_eq!(view.handle, HANDLE_INVALID);
        assert!(view.pds.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("pds").is_none());
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn test_blocks_response_preserves_order_and_absence() {
        let result = PipelineResult {
            target: bob(),
            block_list: BlockList::new(150, vec![record("did:plc:x", "1"), record("did:plc:y", "2")]),
            enriched: vec![
                EnrichedBlockRecord {
                    record: record("did:plc:x", "1"),
                    actor: Some(bob()),
                    created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
                },
                EnrichedBlockRecord {
                    record: record("did:plc:y", "2"),
                    actor: None,
                    created_at: None,
                },
            ],
        };

        let response = BlocksResponse::from(&result);
        assert_eq!(response.total, 150);
        assert!(response.truncated);
        assert_eq!(response.blocks.len(), 2);
        assert_eq!(response.blocks[0].uri, "at://did:plc:x/app.bsky.graph.block/1");
        assert_eq!(
            response.blocks[0].created_at.as_deref(),
            Some("2024-05-01T08:00:00+00:00")
        );
        assert_eq!(response.blocks[1].did, "did:plc:y");
        assert!(response.blocks[1].actor.is_none());
        assert!(response.blocks[1].created_at.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["blocks"][0]["createdAt"], "2024-05-01T08:00:00+00:00");
        assert!(json["blocks"][1].get("actor").is_none());
    }
}
