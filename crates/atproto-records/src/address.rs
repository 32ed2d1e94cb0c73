//! Record addresses and `at://` URIs

use std::fmt;

/// Location of a single record: `at://{repo}/{collection}/{rkey}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordAddress {
    pub repo: String,
    pub collection: String,
    pub rkey: String,
}

impl RecordAddress {
    pub fn new(repo: &str, collection: &str, rkey: &str) -> Self {
        Self {
            repo: repo.to_string(),
            collection: collection.to_string(),
            rkey: rkey.to_string(),
        }
    }

    /// Query string for `com.atproto.repo.getRecord`
    pub(crate) fn get_record_query(&self) -> String {
        format!(
            "repo={}&collection={}&rkey={}",
            urlencoding::encode(&self.repo),
            urlencoding::encode(&self.collection),
            urlencoding::encode(&self.rkey)
        )
    }
}

impl fmt::Display for RecordAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at://{}/{}/{}", self.repo, self.collection, self.rkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_format() {
        let addr = RecordAddress::new("did:web:example.com", "app.bsky.actor.profile", "self");
        assert_eq!(addr.to_string(), "at://did:web:example.com/app.bsky.actor.profile/self");
    }

    #[test]
    fn test_get_record_query_encodes_components() {
        let addr = RecordAddress::new("did:web:example.com%3A8080", "app.bsky.graph.block", "a b");
        assert_eq!(
            addr.get_record_query(),
            "repo=did%3Aweb%3Aexample.com%253A8080&collection=app.bsky.graph.block&rkey=a%20b"
        );
    }
}
