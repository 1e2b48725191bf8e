use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;

/// Where a single request is sent: the base URL captured at issuance plus a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub base_url: String,
    pub path: String,
}

impl RequestTarget {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// Renders the request URL.
    ///
    /// An empty base URL leaves the path relative (`/api/vue`). Otherwise the base
    /// and path are joined with exactly one slash between them.
    pub fn url(&self) -> String {
        if self.base_url.is_empty() {
            return self.path.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// A response as received from the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Decoded body: JSON when it parses, a string when it doesn't, null when empty.
    pub data: Value,
}

impl ExchangeResponse {
    pub fn new(status: StatusCode, data: Value) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            data,
        }
    }

    pub(crate) fn decode_body(bytes: &[u8]) -> Value {
        if bytes.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Waits until the transport can accept a request.
    async fn ready(&self) -> Result<()> {
        Ok(())
    }

    /// Sends a single POST carrying `body` as JSON. Failures are returned untouched.
    async fn post(&self, target: &RequestTarget, body: &Value) -> Result<ExchangeResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn ready(&self) -> Result<()> {
        (**self).ready().await
    }

    async fn post(&self, target: &RequestTarget, body: &Value) -> Result<ExchangeResponse> {
        (**self).post(target, body).await
    }
}
