//! Test helpers for integration tests
//!
//! Spawns the real router over a [`MemoryStore`] and wraps reqwest for
//! envelope assertions.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use market_api::{create_app, AppState};
use market_common::AppConfig;
use market_service::{ServiceContext, ServiceContextBuilder};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::memory::MemoryStore;

/// Service context whose repositories all point at `store`
pub fn memory_context(store: &Arc<MemoryStore>) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .model_repo(store.clone())
        .subscription_repo(store.clone())
        .store_health(store.clone())
        .build()
        .expect("all repositories are set")
}

/// Configuration with a generous rate limit so suites never trip it
pub fn test_config() -> Result<AppConfig> {
    test_config_with(&[])
}

/// [`test_config`] with some variables replaced
pub fn test_config_with(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars: HashMap<&str, &str> = [
        ("DATABASE_URL", "postgresql://unused/test"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "0"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
    ]
    .into_iter()
    .collect();
    vars.extend(overrides.iter().copied());

    AppConfig::from_lookup(|key| vars.get(key).map(ToString::to_string))
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over a fresh store
    pub async fn start() -> Result<Self> {
        Self::start_with_store(Arc::new(MemoryStore::new())).await
    }

    pub async fn start_with_store(store: Arc<MemoryStore>) -> Result<Self> {
        Self::start_with(store, test_config()?).await
    }

    /// Start a server over a fresh store with a custom configuration
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        Self::start_with(Arc::new(MemoryStore::new()), config).await
    }

    async fn start_with(store: Arc<MemoryStore>, config: AppConfig) -> Result<Self> {
        let state = AppState::new(memory_context(&store), config);
        let app = create_app(state)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.patch(&url).json(body).send().await?)
    }

    /// POST a raw body with a JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }
}

/// Assert status and a `success: true` envelope, returning its `data`
pub async fn expect_success(response: Response, expected_status: StatusCode) -> Result<Value> {
    let body = expect_envelope(response, expected_status).await?;
    if body["success"] != Value::Bool(true) {
        anyhow::bail!("Expected success envelope, got {body}");
    }
    Ok(body["data"].clone())
}

/// Assert status and a `success: false` envelope, returning its `error`
pub async fn expect_failure(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = expect_envelope(response, expected_status).await?;
    if body["success"] != Value::Bool(false) || body.get("data").is_some() {
        anyhow::bail!("Expected failure envelope, got {body}");
    }
    body["error"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("Failure envelope without error: {body}"))
}

/// Assert status and return the whole JSON body
pub async fn expect_envelope(response: Response, expected_status: StatusCode) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
