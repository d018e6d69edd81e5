use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

/// Plain GET client bound to one host. One request per call, no retries.
pub struct Fetcher {
    client: reqwest::Client,
    base: Url,
}

impl Fetcher {
    pub fn new(base: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, base })
    }

    /// Resolve a page path against the base host. Links that land on another host are refused.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let url = self
            .base
            .join(path)
            .with_context(|| format!("Invalid page path {:?}", path))?;
        if url.host_str() != self.base.host_str() {
            bail!("Refusing off-site link {}", url);
        }
        Ok(url)
    }

    /// Fetch one page body. Anything other than `200 OK` (or a transport failure)
    /// is logged and comes back as `None`.
    pub async fn get(&self, url: &Url) -> Option<String> {
        match self.try_get(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Request to {} failed: {:#}", url, e);
                None
            }
        }
    }

    async fn try_get(&self, url: &Url) -> Result<Option<String>> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("HTTP {} for {}", status, url);
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        Ok(Some(body))
    }
}
