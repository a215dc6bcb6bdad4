mod basic;
mod client;
mod error;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use error::UpstreamError;

use reqwest::{Method, Request, Url};
use std::time::Duration;
use tracing::debug;

/// Issues a single GET for `url` and returns the body of a successful
/// response.
///
/// The whole exchange, body included, is bounded by `timeout`. Non-2xx
/// statuses are errors. There is no retry.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: Url,
    timeout: Duration,
) -> Result<Vec<u8>, UpstreamError> {
    let mut req = Request::new(Method::GET, url);
    *req.timeout_mut() = Some(timeout);

    let exchange = async {
        let resp = client.execute(req).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }
        let bytes = resp.bytes().await?;
        debug!(status = %status, bytes = bytes.len(), "Upstream response received");
        Ok(bytes.to_vec())
    };

    tokio::time::timeout(timeout, exchange)
        .await
        .map_err(|_| UpstreamError::Timeout(timeout))?
}
