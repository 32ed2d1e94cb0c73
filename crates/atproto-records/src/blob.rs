//! Blob references and CDN URL derivation

use serde::Serialize;

const CDN_BASE_URL: &str = "https://cdn.bsky.app/img";

/// Reference to an image blob stored in an actor's repo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Blob CID
    pub content_hash: String,
    pub media_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Avatar,
    Banner,
}

impl ImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Banner => "banner",
        }
    }
}

/// Bluesky CDN URL for an image blob owned by `owner_did`
pub fn cdn_url(owner_did: &str, content_hash: &str, kind: ImageKind) -> String {
    format!(
        "{CDN_BASE_URL}/{}/plain/{owner_did}/{content_hash}@jpeg",
        kind.as_str()
    )
}

impl ImageRef {
    pub fn cdn_url(&self, owner_did: &str, kind: ImageKind) -> String {
        cdn_url(owner_did, &self.content_hash, kind)
    }

    /// Decode a blob from its record JSON.
    ///
    /// Accepts `{"$type":"blob","ref":{"$link":cid},"mimeType":..}`, a bare
    /// string `ref`, and the legacy `{"cid":..,"mimeType":..}` shape.
    pub(crate) fn from_value(blob: &serde_json::Value) -> Option<Self> {
        let content_hash = match blob.get("ref") {
            Some(ref_val) => {
                if let Some(link) = ref_val.get("$link") {
                    link.as_str()?
                } else {
                    ref_val.as_str()?
                }
            }
            None => blob.get("cid")?.as_str()?,
        };

        if content_hash.is_empty() {
            return None;
        }

        let media_type = blob
            .get("mimeType")
            .and_then(|m| m.as_str())
            .unwrap_or("application/octet-stream");

        Some(Self {
            content_hash: content_hash.to_string(),
            media_type: media_type.to_string(),
        })
    }
}
