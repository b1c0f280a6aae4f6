//! Client configuration.

use std::time::Duration;

/// Where and how the gateway talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash
    /// (e.g. `http://127.0.0.1:8080`).
    pub base_url: String,
    /// Transport-level request timeout. No per-call budget exists above
    /// this; calls are single-shot.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read the base URL from `MYDUKA_API_URL`, falling back to the
    /// default when unset.
    pub fn from_env() -> Self {
        match std::env::var("MYDUKA_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim().to_string()),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides_timeout() {
        let config = ClientConfig::new("http://duka.example").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
