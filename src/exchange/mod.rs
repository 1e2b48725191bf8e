//! Posting payloads to the backend exchange endpoint.
//!
//! - [`Dispatcher`] takes the base URL per call and holds no mutable state.
//! - [`SharedDispatcher`] writes the base URL into a [`SharedClient`] before each
//!   request. Concurrent callers can observe each other's base URL.

mod shared;

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::http::{ExchangeResponse, RequestTarget, Transport};

pub use shared::{ClientDefaults, SharedClient, SharedDispatcher};

/// Path every exchange is posted to.
pub const EXCHANGE_PATH: &str = "/api/vue";

/// Base URL for a single exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BaseUrl {
    /// No base URL; the request path stays relative.
    #[default]
    Default,
    Override(String),
}

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        match self {
            BaseUrl::Default => "",
            BaseUrl::Override(url) => url,
        }
    }
}

/// An empty override counts as absent.
impl From<Option<&str>> for BaseUrl {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(url) if !url.is_empty() => BaseUrl::Override(url.to_string()),
            _ => BaseUrl::Default,
        }
    }
}

impl From<Option<String>> for BaseUrl {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.is_empty() => BaseUrl::Override(url),
            _ => BaseUrl::Default,
        }
    }
}

/// Stateless exchange dispatcher.
#[derive(Clone)]
pub struct Dispatcher<T: Transport> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts `payload` to [`EXCHANGE_PATH`] under `base_url`.
    ///
    /// The response is returned as received. Transport and serialization errors
    /// are propagated without added context.
    #[tracing::instrument(skip(self, payload))]
    pub async fn exchange<P>(&self, payload: &P, base_url: BaseUrl) -> Result<ExchangeResponse>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        let target = RequestTarget::new(base_url.as_str(), EXCHANGE_PATH);

        self.transport.ready().await?;
        debug!("Exchanging with {}...", target.url());
        self.transport.post(&target, &body).await
    }
}
