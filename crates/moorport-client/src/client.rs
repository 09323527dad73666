use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::{ClientError, ConfigError};

/// The portal's resource fetch façade.
///
/// One async operation per remote resource, each issuing exactly one GET.
/// No caching, no retries, no deduplication of concurrent identical calls;
/// callers needing ordering await one call before issuing the next. Every
/// operation settles: it resolves with the decoded body or returns a typed
/// [`ClientError`] the UI can render.
pub struct PortalClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl PortalClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.endpoints()?))
    }

    /// Inject a preconfigured transport (tests, custom TLS).
    pub fn with_http(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the current user's profile.
    pub async fn fetch_profile(&self) -> Result<Value, ClientError> {
        self.get_json(self.endpoints.profile()).await
    }

    /// Fetch a single proposal by its opaque id.
    pub async fn fetch_proposal(&self, id: &str) -> Result<Value, ClientError> {
        self.get_json(self.endpoints.proposal(id)).await
    }

    /// Fetch the reference list of countries.
    pub async fn fetch_countries(&self) -> Result<Value, ClientError> {
        self.get_json(self.endpoints.countries()).await
    }

    /// Fetch a user account by its opaque id.
    pub async fn fetch_user(&self, id: &str) -> Result<Value, ClientError> {
        self.get_json(self.endpoints.user(id)).await
    }

    async fn get_json(&self, url: String) -> Result<Value, ClientError> {
        tracing::debug!(%url, "portal GET");
        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| {
                tracing::warn!(%url, error = %source, "portal request failed");
                ClientError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;
        let body = resp.text().await.map_err(|source| {
            tracing::warn!(%url, error = %source, "portal response body unreadable");
            ClientError::Transport {
                url: url.clone(),
                source,
            }
        })?;
        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(%url, error = %source, "portal response not valid JSON");
            ClientError::Decode { url, source }
        })
    }
}
