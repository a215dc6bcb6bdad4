use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes outbound HTTP requests. Implemented by [`super::BasicClient`] and
/// by test doubles that answer with canned responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
