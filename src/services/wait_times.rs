//! Trait for sources of raw checkpoint wait-time samples.

use crate::fetch::UpstreamError;
use crate::parser::RawSample;

/// Abstraction over the upstream wait-time provider (e.g., the TSA web
/// service).
#[async_trait::async_trait]
pub trait WaitTimeSource: Send + Sync {
    /// Returns every sample the provider currently reports for `airport`.
    ///
    /// `airport` is an already validated, uppercase three-letter code.
    async fn wait_times(&self, airport: &str) -> Result<Vec<RawSample>, UpstreamError>;
}
