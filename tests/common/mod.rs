//! Test doubles shared by the integration tests.

use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tsa_wait_proxy::fetch::HttpClient;
use tsa_wait_proxy::http::{AppState, create_router};
use tsa_wait_proxy::infra::tsa::{DEFAULT_TSA_BASE_URL, TsaClient};

/// [`HttpClient`] that answers every request with the same canned response,
/// optionally after a delay, and remembers the URLs it was asked for.
#[derive(Clone)]
pub struct StubHttp {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
    pub urls: Arc<Mutex<Vec<String>>>,
}

impl StubHttp {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for StubHttp {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(req.url().to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let resp = axum::http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.clone())
            .unwrap();
        Ok(reqwest::Response::from(resp))
    }
}

pub fn tsa_client<C: HttpClient>(http: C, timeout: Duration) -> TsaClient<C> {
    TsaClient::new(http, DEFAULT_TSA_BASE_URL, timeout).unwrap()
}

/// Router wired to a TSA client that talks to `http`.
pub fn router_with(http: StubHttp) -> axum::Router {
    let source = tsa_client(http, Duration::from_secs(8));
    create_router(AppState::new(Arc::new(source)))
}
