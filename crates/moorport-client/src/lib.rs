pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::PortalClient;
pub use config::ClientConfig;
pub use endpoints::Endpoints;
pub use error::{ClientError, ConfigError, ErrorCategory};
