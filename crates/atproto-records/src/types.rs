use serde::{Deserialize, Serialize};

use crate::blob::ImageRef;

/// Collection holding an actor's profile record
pub const PROFILE_COLLECTION: &str = "app.bsky.actor.profile";
/// Record key of the single profile record
pub const PROFILE_RKEY: &str = "self";

/// `com.atproto.repo.getRecord` response; only the record body is read
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope<T> {
    pub value: T,
}

/// Actor profile decoded from `app.bsky.actor.profile/self`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<ImageRef>,
    pub banner: Option<ImageRef>,
}

/// Raw profile record body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileRecord {
    pub(crate) display_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) avatar: Option<serde_json::Value>,
    pub(crate) banner: Option<serde_json::Value>,
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Self {
            display_name: record.display_name.filter(|s| !s.is_empty()),
            description: record.description.filter(|s| !s.is_empty()),
            avatar: record.avatar.as_ref().and_then(ImageRef::from_value),
            banner: record.banner.as_ref().and_then(ImageRef::from_value),
        }
    }
}

/// Any record carrying a `createdAt` field
#[derive(Debug, Deserialize)]
pub(crate) struct TimestampedRecord {
    #[serde(rename = "createdAt")]
    pub(crate) created_at: Option<String>,
}
