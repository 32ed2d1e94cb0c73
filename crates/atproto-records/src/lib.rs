//! AT Protocol record lookup
//!
//! Fetches raw records by `repo/collection/rkey` address through any host
//! serving `com.atproto.repo.getRecord` (a PDS or a Slingshot cache), and
//! decodes the two records the block explorer needs: actor profiles and
//! record creation timestamps. Lookups are best-effort; callers get `None`
//! instead of an error when a record is unavailable.

mod address;
mod blob;
mod client;
mod error;
mod types;

pub use address::RecordAddress;
pub use blob::{cdn_url, ImageKind, ImageRef};
pub use client::RecordClient;
pub use error::{RecordError, Result};
pub use types::{Profile, RecordEnvelope, PROFILE_COLLECTION, PROFILE_RKEY};
