use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, info};

use crate::fetch::{BasicClient, HttpClient, UpstreamError, fetch_bytes};
use crate::parser::{RawSample, parse_samples};
use crate::services::wait_times::WaitTimeSource;

pub const DEFAULT_TSA_BASE_URL: &str =
    "https://apps.tsa.dhs.gov/MyTSAWebService/GetTSOWaitTimes.ashx";

/// Client for the MyTSA checkpoint wait-time web service.
pub struct TsaClient<C = BasicClient> {
    http: C,
    base_url: Url,
    timeout: Duration,
}

impl<C: HttpClient> TsaClient<C> {
    pub fn new(http: C, base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid TSA base URL: {base_url}"))?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    /// Request URL for one airport: `<base>?ap=<airport>&output=json`.
    pub fn request_url(&self, airport: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("ap", airport)
            .append_pair("output", "json");
        url
    }
}

#[async_trait]
impl<C: HttpClient> WaitTimeSource for TsaClient<C> {
    #[tracing::instrument(skip(self), fields(timeout_secs = self.timeout.as_secs()))]
    async fn wait_times(&self, airport: &str) -> Result<Vec<RawSample>, UpstreamError> {
        let url = self.request_url(airport);
        debug!(url = %url, "Fetching TSA wait times");

        let fetch_start = std::time::Instant::now();
        let bytes = fetch_bytes(&self.http, url, self.timeout).await?;
        let samples = parse_samples(&bytes, airport)?;

        info!(
            samples = samples.len(),
            elapsed_ms = fetch_start.elapsed().as_millis() as u64,
            "TSA wait times fetched"
        );
        Ok(samples)
    }
}
