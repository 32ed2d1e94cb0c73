//! Constellation Backlink Client
//!
//! A Rust client for the [Constellation](https://constellation.microcosm.blue)
//! backlink index, which answers "which records link to this subject" across
//! the AT Protocol network. Used here to list the `app.bsky.graph.block`
//! records pointing at an account.

mod client;
mod error;
mod types;

pub use client::{ConstellationClient, BLOCK_SOURCE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use error::{ConstellationError, Result};
pub use types::{BacklinksResponse, BlockList, BlockRecord, LinkRecord};
