//! Client configuration
//!
//! A [`ClientConfig`] is built once (directly, through the builder, or from
//! the environment) and handed to [`crate::Client::with_config`]. It is never
//! mutated afterwards.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://www.eventbriteapi.com/v3";

/// Default requests-per-second ceiling
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 5;

/// Default transport timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Eventbrite client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended verbatim
    pub base_url: String,
    /// Personal OAuth token sent as the `token` query parameter
    pub token: String,
    /// Requests per second; zero disables rate limiting
    pub requests_per_second: u32,
    /// Request timeout for the default transport
    pub timeout: Duration,
    /// User agent for the default transport
    pub user_agent: String,
    /// Caller-supplied transport, used instead of building one
    pub http_client: Option<reqwest::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("eventbrite-client/{}", env!("CARGO_PKG_VERSION")),
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the process environment.
    ///
    /// Env vars:
    /// - EVENTBRITE_TOKEN (default: empty; calls fail until one is set)
    /// - EVENTBRITE_BASE_URL (default: https://www.eventbriteapi.com/v3)
    /// - EVENTBRITE_RATE_LIMIT (default: 5, 0 disables)
    /// - EVENTBRITE_HTTP_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(token) = lookup("EVENTBRITE_TOKEN") {
            config.token = token;
        }
        if let Some(base_url) = lookup("EVENTBRITE_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("EVENTBRITE_RATE_LIMIT") {
            config.requests_per_second = parse_number("EVENTBRITE_RATE_LIMIT", &raw)?;
        }
        if let Some(raw) = lookup("EVENTBRITE_HTTP_TIMEOUT_SECS") {
            config.timeout =
                Duration::from_secs(parse_number("EVENTBRITE_HTTP_TIMEOUT_SECS", &raw)?);
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| Error::invalid_config(field, format!("'{raw}': {e}")))
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the auth token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    /// Set the rate limit (requests per second)
    pub fn rate_limit(mut self, requests_per_second: u32) -> Self {
        self.config.requests_per_second = requests_per_second;
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.requests_per_second = 0;
        self
    }

    /// Set the request timeout of the default transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Use a preconfigured transport
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.config.http_client = Some(client);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.eventbriteapi.com/v3");
        assert_eq!(config.token, "");
        assert_eq!(config.requests_per_second, 5);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("eventbrite-client/"));
        assert!(config.http_client.is_none());
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .base_url("http://test.local")
            .token("abc123")
            .rate_limit(10)
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent/1.0")
            .http_client(reqwest::Client::new())
            .build();

        assert_eq!(config.base_url, "http://test.local");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.requests_per_second, 10);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert!(config.http_client.is_some());

        let config = ClientConfig::builder().no_rate_limit().build();
        assert_eq!(config.requests_per_second, 0);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token, "");
        assert_eq!(config.requests_per_second, DEFAULT_REQUESTS_PER_SECOND);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("EVENTBRITE_TOKEN", "secret"),
            ("EVENTBRITE_BASE_URL", "http://localhost:9000"),
            ("EVENTBRITE_RATE_LIMIT", "0"),
            ("EVENTBRITE_HTTP_TIMEOUT_SECS", " 12 "),
        ]))
        .unwrap();

        assert_eq!(config.token, "secret");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.requests_per_second, 0);
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_from_lookup_rejects_bad_numbers() {
        let err = ClientConfig::from_lookup(lookup_from(&[("EVENTBRITE_RATE_LIMIT", "fast")]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref field, .. } if field == "EVENTBRITE_RATE_LIMIT"
        ));

        let err =
            ClientConfig::from_lookup(lookup_from(&[("EVENTBRITE_HTTP_TIMEOUT_SECS", "-1")]))
                .unwrap_err();
        assert!(err.to_string().contains("EVENTBRITE_HTTP_TIMEOUT_SECS"));
    }
}
