use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::Url;
use std::time::Duration;

/// Origin the desktop shell serves its web page from.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8060";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute URL that relative request targets are resolved against.
    pub origin: Url,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(origin: Option<String>, timeout_ms: Option<u64>) -> Result<Self> {
        let origin = origin.unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = Url::parse(&origin).with_context(|| format!("Invalid origin: {}", origin))?;
        if origin.cannot_be_a_base() {
            bail!("Origin cannot be used as a base URL: {}", origin);
        }

        let timeout = timeout_ms.map(Duration::from_millis);
        debug!("Using origin {} (timeout: {:?})", origin, timeout);

        Ok(Self {
            origin,
            timeout,
            user_agent: format!("venues/{}", crate::VERSION),
        })
    }
}
