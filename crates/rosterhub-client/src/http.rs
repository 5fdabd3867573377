//! HTTP client for the API gateway.
//!
//! All requests go through the gateway; the base URL is an explicit
//! constructor argument, not a shared global. Connectivity failures come
//! back as [`ClientError::Gateway`], which the UI layer surfaces as its
//! blocking alert. There are no retries and no request timeouts; a hung
//! request hangs its caller.

use rosterhub_store::{page_from_wire, Document};
use serde_json::Value;

use crate::error::ClientError;

/// Client for one gateway instance.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Builds a client for the gateway at `base_url`
    /// (e.g. `http://localhost:8001`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        GatewayClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs a gateway path and decodes the JSON payload.
    pub async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| ClientError::Gateway(e.to_string()))?;
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetches one sport's whole collection: `GET {prefix}/getTodas`.
    pub async fn fetch_all(&self, prefix: &str) -> Result<Vec<Document>, ClientError> {
        let page = self.get_json(&format!("{prefix}/getTodas")).await?;
        Ok(page_from_wire(&page)?)
    }

    /// Fetches one document: `GET {prefix}/getPorId/{id}`.
    pub async fn fetch_one(&self, prefix: &str, id: &str) -> Result<Document, ClientError> {
        let wire = self.get_json(&format!("{prefix}/getPorId/{id}")).await?;
        Ok(Document::from_wire(&wire)?)
    }

    /// POSTs a `setTodo` body. The response body is not interpreted; the
    /// caller re-fetches the document afterwards regardless.
    pub async fn save(&self, prefix: &str, body: &Value) -> Result<(), ClientError> {
        self.http
            .post(format!("{}{}/setTodo", self.base_url, prefix))
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| ClientError::Gateway(e.to_string()))?;
        Ok(())
    }

    /// `GET {prefix}/`: the home payload.
    pub async fn home(&self, prefix: &str) -> Result<Value, ClientError> {
        self.get_json(&format!("{prefix}/")).await
    }

    /// `GET {prefix}/acercade`: the about payload.
    pub async fn about(&self, prefix: &str) -> Result<Value, ClientError> {
        self.get_json(&format!("{prefix}/acercade")).await
    }
}
