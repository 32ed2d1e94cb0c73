//! AT Protocol Identity Resolver
//!
//! Resolves handles and DIDs to a canonical identity (DID, handle, PDS
//! endpoint, signing key) using a Slingshot-compatible mini-doc endpoint.
//! A DID whose resolution fails degrades to a placeholder identity instead
//! of failing; a handle that cannot be resolved is an error.

mod error;
mod resolver;
mod types;

pub use error::{IdentityError, Result};
pub use resolver::{normalize_identifier, IdentityResolver};
pub use types::{is_did, Identity, Resolution, HANDLE_INVALID};
