use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use std::path::Path;

use crate::{
    config::ClientConfig,
    exchange::{BaseUrl, Dispatcher},
    http::{ExchangeResponse, HttpTransport},
};

/// Posts `payload` to the exchange endpoint and returns the response.
#[tracing::instrument(skip(config, payload))]
pub async fn exchange(
    config: &ClientConfig,
    base_url: Option<String>,
    payload: &Value,
) -> Result<ExchangeResponse> {
    let dispatcher = Dispatcher::new(HttpTransport::new(config)?);
    let response = dispatcher.exchange(payload, BaseUrl::from(base_url)).await?;
    debug!("Exchange returned {}", response.status);
    Ok(response)
}

/// Reads the payload from inline JSON or a file. Defaults to an empty object.
pub fn load_payload(data: Option<&str>, data_file: Option<&Path>) -> Result<Value> {
    match (data, data_file) {
        (Some(data), _) => serde_json::from_str(data).context("Failed to parse --data as JSON"),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {} as JSON", path.display()))
        }
        (None, None) => Ok(Value::Object(Default::default())),
    }
}

/// Formats a response body for stdout: strings raw, everything else as pretty JSON.
pub fn render_response(response: &ExchangeResponse) -> Result<String> {
    match &response.data {
        Value::String(text) => Ok(text.clone()),
        data => Ok(serde_json::to_string_pretty(data)?),
    }
}
