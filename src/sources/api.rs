use crate::error::FinderError;
use crate::models::PropertyRecord;
use crate::sources::traits::{AvailabilitySource, ListingSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Listings and availability from the marketplace HTTP API.
pub struct ApiListingSource {
    client: Client,
    base_url: String,
}

/// Listings envelope with each record left undecoded, so one bad record
/// does not sink the page.
#[derive(Debug, Deserialize)]
struct RawListings {
    properties: Vec<Value>,
    #[serde(default)]
    count: usize,
}

/// The availability endpoint has answered with both shapes over time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AvailabilityPayload {
    Dates(Vec<String>),
    Wrapped { dates: Vec<String> },
}

impl ApiListingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FinderError::from)
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Err(FinderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        response.text().await.context("Failed to read response body")
    }
}

pub(crate) fn decode_listings(body: &str) -> Result<Vec<PropertyRecord>> {
    let response: RawListings =
        serde_json::from_str(body).context("Listings response is not valid JSON")?;

    if response.count != response.properties.len() {
        warn!(
            "Listings response says count={} but carries {} properties",
            response.count,
            response.properties.len()
        );
    }

    let mut properties = Vec::with_capacity(response.properties.len());
    for (i, raw) in response.properties.into_iter().enumerate() {
        match serde_json::from_value::<PropertyRecord>(raw) {
            Ok(property) => properties.push(property),
            Err(err) => warn!("Skipping listing #{}: {}", i, err),
        }
    }
    Ok(properties)
}

pub(crate) fn decode_availability(body: &str) -> Result<Vec<String>> {
    let payload: AvailabilityPayload =
        serde_json::from_str(body).context("Availability response is not valid JSON")?;
    Ok(match payload {
        AvailabilityPayload::Dates(dates) | AvailabilityPayload::Wrapped { dates } => dates,
    })
}

#[async_trait]
impl ListingSource for ApiListingSource {
    async fn fetch_listings(&self) -> Result<Vec<PropertyRecord>> {
        let url = self.endpoint("api/properties");
        let body = self.get_text(&url).await?;
        debug!("Downloaded {} bytes of listings JSON", body.len());

        let properties = decode_listings(&body)?;
        info!("Fetched {} listings from {}", properties.len(), self.base_url);
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}

#[async_trait]
impl AvailabilitySource for ApiListingSource {
    async fn available_dates(&self, property_id: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&format!("api/properties/{property_id}/availability"));
        let body = self.get_text(&url).await?;
        decode_availability(&body)
    }
}
