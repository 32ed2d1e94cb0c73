//! Block list enrichment
//!
//! Resolves a handle or DID, fetches the first page of blocks against it
//! from Constellation, and hydrates every block with the blocker's identity,
//! profile and the block record's creation time. Per-block lookups run
//! concurrently and degrade to absent fields on failure; only resolving
//! the target or fetching the block list can fail a run.

mod actor;
mod error;
mod pipeline;

pub use actor::{Actor, ActorResolver};
pub use error::{PipelineError, Result};
pub use pipeline::{BlockPipeline, EnrichedBlockRecord, PipelineResult};

pub use atproto_identity::{normalize_identifier, Identity, HANDLE_INVALID};
pub use atproto_records::{cdn_url, ImageKind, ImageRef, Profile};
pub use constellation_client::{BlockList, BlockRecord};
