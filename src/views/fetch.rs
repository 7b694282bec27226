use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{Router, body::Body};
use http::{Method, Request};
use reqwest::Client;
use serde_json::Value;
use tower::ServiceExt;

// a view only ever issues a bare GET and reads the JSON body, whatever the status
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn get_json(&self, endpoint: &str) -> Result<Value>;
}

/// Fetches over the network from a running instance of the API.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Response from {} was not JSON", url))
    }
}

/// Dispatches requests straight into a router in the same process.
pub struct RouterFetcher {
    router: Router,
}

impl RouterFetcher {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl ContentFetcher for RouterFetcher {
    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(endpoint)
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .with_context(|| format!("Failed to read body from {}", endpoint))?;

        serde_json::from_slice(&bytes)
            .with_context(|| format!("Response from {} was not JSON", endpoint))
    }
}
