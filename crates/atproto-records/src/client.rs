use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::address::RecordAddress;
use crate::error::{RecordError, Result};
use crate::types::{
    Profile, ProfileRecord, RecordEnvelope, TimestampedRecord, PROFILE_COLLECTION, PROFILE_RKEY,
};

const DEFAULT_SERVICE_URL: &str = "https://slingshot.microcosm.blue";

/// Client for `com.atproto.repo.getRecord`
#[derive(Debug, Clone)]
pub struct RecordClient {
    client: Client,
    service_url: String,
}

impl RecordClient {
    /// Create a new client against the public Slingshot instance
    pub fn new() -> Self {
        Self::with_service_url(DEFAULT_SERVICE_URL)
    }

    /// Create a new client with a custom record host
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
        }
    }

    /// Fetch and decode the record at `address`
    pub async fn get_record<T: DeserializeOwned>(
        &self,
        address: &RecordAddress,
    ) -> Result<RecordEnvelope<T>> {
        let url = format!(
            "{}/xrpc/com.atproto.repo.getRecord?{}",
            self.service_url,
            address.get_record_query()
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(RecordError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| RecordError::Decode(e.to_string()))
    }

    /// Fetch an actor's profile record, `None` if it is missing or unreadable
    pub async fn fetch_profile(&self, did: &str) -> Option<Profile> {
        let address = RecordAddress::new(did, PROFILE_COLLECTION, PROFILE_RKEY);

        match self.get_record::<ProfileRecord>(&address).await {
            Ok(envelope) => Some(envelope.value.into()),
            Err(e) => {
                debug!(did, error = %e, "No profile record");
                None
            }
        }
    }

    /// Fetch a record's `createdAt`, `None` on any failure
    pub async fn fetch_record_timestamp(
        &self,
        repo: &str,
        collection: &str,
        rkey: &str,
    ) -> Option<DateTime<Utc>> {
        let address = RecordAddress::new(repo, collection, rkey);

        let envelope = match self.get_record::<TimestampedRecord>(&address).await {
            Ok(envelope) => envelope,
            Err(e) => {
                debug!(uri = %address, error = %e, "Record lookup failed");
                return None;
            }
        };

        let raw = envelope.value.created_at?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                debug!(uri = %address, created_at = %raw, error = %e, "Unparsable createdAt");
                None
            }
        }
    }
}

impl Default for RecordClient {
    fn default() -> Self {
        Self::new()
    }
}
