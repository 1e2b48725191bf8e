//! reqwest-backed transport.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde_json::Value;

use super::transport::{ExchangeResponse, RequestTarget, Transport};
use crate::config::ClientConfig;

/// Transport that issues real HTTP requests.
///
/// Relative targets are resolved against `origin`, the way a browser resolves
/// them against the page it was loaded from.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    origin: Url,
}

impl HttpTransport {
    /// Builds a reqwest client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, config.origin.clone()))
    }

    /// Wraps an existing reqwest Client.
    pub fn with_client(client: Client, origin: Url) -> Self {
        Self { client, origin }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves a target to an absolute URL. Absolute targets pass through unchanged.
    pub fn resolve(&self, target: &RequestTarget) -> Result<Url> {
        Ok(self.origin.join(&target.url())?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, body))]
    async fn post(&self, target: &RequestTarget, body: &Value) -> Result<ExchangeResponse> {
        let url = self.resolve(target)?;
        debug!("POST {}...", url);

        let response = self.client.post(url).json(body).send().await?;
        let response = response.error_for_status()?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        debug!("Received {} ({} bytes)", status, bytes.len());

        Ok(ExchangeResponse {
            status,
            headers,
            data: ExchangeResponse::decode_body(&bytes),
        })
    }
}
