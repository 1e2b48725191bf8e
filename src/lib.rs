pub mod commands;
pub mod config;
pub mod delay;
pub mod exchange;
pub mod http;

pub use config::ClientConfig;
pub use delay::delay;
pub use exchange::{
    BaseUrl, ClientDefaults, Dispatcher, EXCHANGE_PATH, SharedClient, SharedDispatcher,
};
pub use http::{ExchangeResponse, HttpTransport, RequestTarget, Transport};

/// Version string, derived from git tags at build time.
pub const VERSION: &str = env!("VENUES_VERSION");
