// remote.rs
use crate::catalog::{Catalog, CatalogError};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

const USER_AGENT: &str = concat!("unistay/", env!("CARGO_PKG_VERSION"));

/// One-shot loader for a catalog published as JSON over HTTP, such as the
/// `/api/hostels/nearby` endpoint of another instance.
pub struct CatalogFetcher {
    client: Client,
}

impl CatalogFetcher {
    pub fn new() -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<Catalog, CatalogError> {
        info!("Fetching hostel catalog from {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!("HTTP {status} from {url}")));
        }

        let body: Value = resp
            .json()
            .map_err(|e| CatalogError::JsonParse(e.to_string()))?;

        let catalog = Catalog::from_value(body)?;
        info!("Fetched {} hostels", catalog.len());
        Ok(catalog)
    }
}
