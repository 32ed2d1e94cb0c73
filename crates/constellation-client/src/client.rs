use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{ConstellationError, Result};
use crate::types::{BacklinksResponse, BlockList};

const DEFAULT_SERVICE_URL: &str = "https://constellation.microcosm.blue";
const GET_BACKLINKS: &str = "blue.microcosm.links.getBacklinks";

/// Link source for block records: `app.bsky.graph.block` records via `.subject`
pub const BLOCK_SOURCE: &str = "app.bsky.graph.block:subject";

/// Number of blocks fetched per lookup
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page Constellation serves
pub const MAX_PAGE_SIZE: u32 = 100;

/// Client for the Constellation backlink index
#[derive(Debug, Clone)]
pub struct ConstellationClient {
    client: Client,
    service_url: String,
    page_size: u32,
}

impl ConstellationClient {
    /// Create a new client against the public Constellation instance
    pub fn new() -> Self {
        Self::with_service_url(DEFAULT_SERVICE_URL)
    }

    /// Create a new client with a custom Constellation URL
    pub fn with_service_url(service_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, service_url)
    }

    /// Create a client sharing an existing HTTP client
    pub fn with_client(client: Client, service_url: &str) -> Self {
        Self {
            client,
            service_url: service_url.trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the block page size, clamped to `1..=MAX_PAGE_SIZE`
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of records linking to `subject` from `source`
    ///
    /// # Arguments
    /// * `subject` - DID or AT URI being linked to
    /// * `source` - `collection:path` of the linking field, e.g. [`BLOCK_SOURCE`]
    /// * `limit` - Maximum number of records to return
    pub async fn get_backlinks(
        &self,
        subject: &str,
        source: &str,
        limit: u32,
    ) -> Result<BacklinksResponse> {
        let url = format!(
            "{}/xrpc/{GET_BACKLINKS}?subject={}&source={}&limit={}",
            self.service_url,
            urlencoding::encode(subject),
            urlencoding::encode(source),
            limit
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ConstellationError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ConstellationError::Decode(e.to_string()))
    }

    /// Fetch the first page of blocks against `did`
    pub async fn fetch_blocks(&self, did: &str) -> Result<BlockList> {
        let response = self.get_backlinks(did, BLOCK_SOURCE, self.page_size).await?;
        let list = BlockList::from(response);

        debug!(
            did,
            total = list.total,
            returned = list.records.len(),
            truncated = list.truncated,
            "Fetched block list"
        );

        Ok(list)
    }
}

impl Default for ConstellationClient {
    fn default() -> Self {
        Self::new()
    }
}
