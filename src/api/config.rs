//! Backend location and request policy. Only public values live here; the
//! bearer token is attached by [`super::ApiClient`] and never stored in config.

use super::errors::ApiError;
use std::time::Duration;
use url::Url;

/// Prefix every backend route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Default request timeout applied to all HTTP helpers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Parses the backend base URL, e.g. `https://hr.example.com`.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL is empty, malformed or not http(s).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let normalized = base_url.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(ApiError::Config("API base URL is not configured.".to_string()));
        }

        let base_url = Url::parse(normalized)
            .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        if base_url.host().is_none() {
            return Err(ApiError::Config(
                "Invalid API base URL: no host specified".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves a route such as `/qr-auth/status/abc` to an absolute URL.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the joined URL cannot be parsed.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');
        let joined = format!("{base}{API_PREFIX}/{path}");

        Url::parse(&joined).map_err(|err| ApiError::Config(format!("Invalid endpoint URL: {err}")))
    }

    /// Resolves `path` and appends `segment` as one percent-encoded path
    /// segment, so a value holding `/`, `?` or `#` stays inside it.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the joined URL cannot be parsed.
    pub fn endpoint_with_segment(&self, path: &str, segment: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(path)?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Config("API base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_prefix_and_path() {
        let config = ApiConfig::new("https://hr.example.com/").unwrap();
        let url = config.endpoint("/qr-auth/status/abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://hr.example.com/api/v1/qr-auth/status/abc123"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ApiConfig::new("http://localhost:8000/hr").unwrap();
        let url = config.endpoint("workers/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/hr/api/v1/workers/");
    }

    #[test]
    fn segment_is_percent_encoded() {
        let config = ApiConfig::new("https://hr.example.com").unwrap();
        let url = config
            .endpoint_with_segment("/qr-auth/status/", "ab#1/2?x y")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://hr.example.com/api/v1/qr-auth/status/ab%231%2F2%3Fx%20y"
        );
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn rejects_empty_and_unsupported_urls() {
        assert!(matches!(ApiConfig::new("  "), Err(ApiError::Config(_))));
        assert!(matches!(
            ApiConfig::new("ftp://hr.example.com"),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(ApiConfig::new("not a url"), Err(ApiError::Config(_))));
    }

    #[test]
    fn default_timeout_is_applied() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        let config = config.with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
