use url::Url;

use crate::error::ConfigError;

/// Registry of the REST resource URLs the portals consume.
///
/// Owns the base URL and the `/api` prefix; resource ids are opaque and
/// joined without validation.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    pub fn profile(&self) -> String {
        self.api_url("profile")
    }

    pub fn countries(&self) -> String {
        self.api_url("countries")
    }

    pub fn proposals(&self) -> String {
        self.api_url("proposals")
    }

    pub fn proposal(&self, id: &str) -> String {
        self.api_url(&format!("proposals/{id}"))
    }

    pub fn users(&self) -> String {
        self.api_url("users")
    }

    pub fn user(&self, id: &str) -> String {
        self.api_url(&format!("users/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let endpoints = Endpoints::new("http://localhost:8000/").unwrap();
        assert_eq!(endpoints.profile(), "http://localhost:8000/api/profile");
    }

    #[test]
    fn resource_ids_are_joined_verbatim() {
        let endpoints = Endpoints::new("https://portal.example.com").unwrap();
        assert_eq!(
            endpoints.proposal("123"),
            "https://portal.example.com/api/proposals/123"
        );
        assert_eq!(
            endpoints.user("u-9"),
            "https://portal.example.com/api/users/u-9"
        );
        assert_eq!(
            endpoints.countries(),
            "https://portal.example.com/api/countries"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(
            Endpoints::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
