//! Iconify search backend
//!
//! `IconSearch` is the seam between the resolver and the network; the
//! resolver only ever sees a list of icon identifiers or a `LookupError`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::core::error::LookupError;

pub const DEFAULT_ENDPOINT: &str = "https://api.iconify.design/search";
pub const DEFAULT_COLLECTION: &str = "cbi";
pub const DEFAULT_LIMIT: u32 = 10;

/// Free-text icon search within one collection
#[async_trait]
pub trait IconSearch: Send + Sync {
    /// Icon identifiers in service order, still carrying the collection prefix
    async fn search(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    icons: Vec<String>,
}

/// HTTP client for the Iconify search API
#[derive(Debug, Clone)]
pub struct IconifyClient {
    http: reqwest::Client,
    endpoint: String,
    collection: String,
    limit: u32,
}

impl IconifyClient {
    pub fn new(
        endpoint: impl Into<String>,
        collection: impl Into<String>,
        limit: u32,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            collection: collection.into(),
            limit,
        })
    }
}

#[async_trait]
impl IconSearch for IconifyClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let limit = self.limit.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("collection", self.collection.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.icons)
    }
}
