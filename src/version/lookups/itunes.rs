//! iTunes lookup API implementation

use std::time::Duration;

use crate::config::{LOOKUP_REGION, LOOKUP_TIMEOUT_MS, USER_AGENT};
use crate::version::error::LookupError;
use crate::version::lookup::AppLookup;
use crate::version::types::{LookupResponse, RemoteAppInfo};
use reqwest::Url;
use tracing::{debug, warn};

/// Default base URL for the iTunes lookup API
pub const DEFAULT_BASE_URL: &str = "http://itunes.apple.com";

/// Lookup implementation for the iTunes lookup API
pub struct ItunesLookup {
    client: reqwest::Client,
    base_url: String,
}

impl ItunesLookup {
    /// Creates a new ItunesLookup with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Duration::from_millis(LOOKUP_TIMEOUT_MS))
    }

    /// Creates a new ItunesLookup whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build `<base>/<region>/lookup?bundleId=<bundle_id>`
    fn lookup_url(&self, bundle_id: &str) -> Result<Url, LookupError> {
        if bundle_id.is_empty()
            || bundle_id
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(LookupError::InvalidUrl(format!(
                "bundle identifier {:?} cannot be used in a URL",
                bundle_id
            )));
        }

        let mut url = Url::parse(&format!("{}/{}/lookup", self.base_url, LOOKUP_REGION))
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.query_pairs_mut().append_pair("bundleId", bundle_id);

        Ok(url)
    }
}

impl Default for ItunesLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl AppLookup for ItunesLookup {
    async fn lookup(&self, bundle_id: &str) -> Result<RemoteAppInfo, LookupError> {
        let url = self.lookup_url(bundle_id)?;
        debug!("Looking up {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("iTunes lookup returned status {}: {}", status, url);
            return Err(LookupError::Response(status));
        }

        let body = response.bytes().await?;

        let lookup: LookupResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse iTunes lookup response: {}", e);
            LookupError::Decoding(e)
        })?;

        lookup.into_first().ok_or(LookupError::NoResults)
    }
}
