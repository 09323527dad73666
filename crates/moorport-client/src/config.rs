use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::endpoints::Endpoints;
use crate::error::ConfigError;

/// Client configuration: where the portal API lives.
///
/// Loaded from a small TOML file or constructed directly by the embedding
/// application; there is no ambient environment lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&content)?;
        Ok(cfg)
    }

    /// Validate the base URL and hand out the endpoint registry.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        Endpoints::new(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:8000\"").unwrap();
        let cfg = ClientConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8000");
        assert!(cfg.endpoints().is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ClientConfig::from_toml_file("/nonexistent/moorport.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [").unwrap();
        let err = ClientConfig::from_toml_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected_at_endpoint_construction() {
        let cfg = ClientConfig::new("nope");
        assert!(matches!(
            cfg.endpoints(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
