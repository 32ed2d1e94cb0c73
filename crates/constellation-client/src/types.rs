use serde::{Deserialize, Serialize};

/// A record linking to the queried subject
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkRecord {
    pub did: String,
    pub collection: String,
    pub rkey: String,
}

/// `blue.microcosm.links.getBacklinks` response
#[derive(Debug, Clone, Deserialize)]
pub struct BacklinksResponse {
    pub total: u64,
    pub records: Vec<LinkRecord>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// A block: `blocker_did` blocked the subject with the record at `collection/rkey`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    pub blocker_did: String,
    pub collection: String,
    pub rkey: String,
}

impl BlockRecord {
    pub fn uri(&self) -> String {
        format!("at://{}/{}/{}", self.blocker_did, self.collection, self.rkey)
    }
}

impl From<LinkRecord> for BlockRecord {
    fn from(link: LinkRecord) -> Self {
        Self {
            blocker_did: link.did,
            collection: link.collection,
            rkey: link.rkey,
        }
    }
}

/// First page of blocks against an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockList {
    /// Total blocks known to the index, which may exceed `records.len()`
    pub total: u64,
    /// Block records in the order the index returned them
    pub records: Vec<BlockRecord>,
    /// Whether `total` exceeds the records actually returned
    pub truncated: bool,
}

impl BlockList {
    pub fn new(total: u64, records: Vec<BlockRecord>) -> Self {
        let truncated = total > records.len() as u64;
        Self {
            total,
            records,
            truncated,
        }
    }
}

impl From<BacklinksResponse> for BlockList {
    fn from(response: BacklinksResponse) -> Self {
        let records = response.records.into_iter().map(BlockRecord::from).collect();
        Self::new(response.total, records)
    }
}
