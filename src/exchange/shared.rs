//! Exchange through a client whose base URL is shared by every caller.

use anyhow::Result;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

use super::{BaseUrl, EXCHANGE_PATH};
use crate::http::{ExchangeResponse, RequestTarget, Transport};

/// Mutable defaults applied to every request sent through a [`SharedClient`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDefaults {
    pub base_url: String,
}

/// HTTP client with defaults shared across all clones.
///
/// The base URL is read when a request is issued, after the transport is ready,
/// not when the request is first requested.
pub struct SharedClient<T: Transport> {
    defaults: Arc<RwLock<ClientDefaults>>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for SharedClient<T> {
    fn clone(&self) -> Self {
        Self {
            defaults: Arc::clone(&self.defaults),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> SharedClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            defaults: Arc::new(RwLock::new(ClientDefaults::default())),
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn defaults(&self) -> ClientDefaults {
        self.defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn base_url(&self) -> String {
        self.defaults().base_url
    }

    pub fn set_base_url(&self, base_url: impl Into<String>) {
        let base_url = base_url.into();
        debug!("Setting shared base URL to {:?}", base_url);
        self.defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .base_url = base_url;
    }

    /// Sends a POST to `path` under whatever base URL is current at issuance.
    #[tracing::instrument(skip(self, body))]
    pub async fn post(&self, path: &str, body: &Value) -> Result<ExchangeResponse> {
        self.transport.ready().await?;

        let target = RequestTarget::new(self.base_url(), path);
        debug!("POST {} via shared client...", target.url());
        self.transport.post(&target, body).await
    }
}

/// Exchange dispatcher that configures a [`SharedClient`] before each request.
///
/// Two exchanges in flight at once race on the shared base URL: the one issued
/// later can be sent under the base URL set by the other.
#[derive(Clone)]
pub struct SharedDispatcher<T: Transport> {
    client: SharedClient<T>,
}

impl<T: Transport> SharedDispatcher<T> {
    pub fn new(client: SharedClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SharedClient<T> {
        &self.client
    }

    /// Sets the shared base URL to `base_url`, or resets it to empty when absent
    /// or empty, then posts `payload` to [`EXCHANGE_PATH`].
    ///
    /// The base URL is left as set when the request fails.
    #[tracing::instrument(skip(self, payload))]
    pub async fn exchange<P>(&self, payload: &P, base_url: Option<&str>) -> Result<ExchangeResponse>
    where
        P: Serialize + ?Sized,
    {
        self.client.set_base_url(BaseUrl::from(base_url).as_str());

        let body = serde_json::to_value(payload)?;
        self.client.post(EXCHANGE_PATH, &body).await
    }
}
