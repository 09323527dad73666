use thiserror::Error;

/// Error types for portal fetch operations.
///
/// Every façade call settles with either a decoded body or one of these;
/// the calling UI owns rendering the failure state.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, timeout, or non-success HTTP status failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON the remote API promises.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// The URL the failing request was issued against.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } => ErrorCategory::Transport,
            Self::Decode { .. } => ErrorCategory::Decode,
        }
    }
}

/// Error categories for monitoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Decode,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Errors raised while loading or validating client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid portal base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
