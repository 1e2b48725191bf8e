//! HTTP transport used by the exchange dispatchers.

mod client;
mod transport;

pub use client::HttpTransport;
pub use transport::{ExchangeResponse, RequestTarget, Transport};

#[cfg(test)]
pub use transport::MockTransport;
