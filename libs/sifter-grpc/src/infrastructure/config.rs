//! Connection settings for the gRPC gateway

use std::time::Duration;

use sifter_domain::SifterError;

/// Address used when no target is configured
pub const DEFAULT_TARGET: &str = "localhost:50051";

/// Where and how to reach the sifter
///
/// Timeouts left as `None` fall back to the transport's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcSifterConfig {
    /// `host:port`, or a full `http://` URI
    pub target: String,
    pub connect_timeout: Option<Duration>,
    /// Deadline applied to every call
    pub request_timeout: Option<Duration>,
}

impl Default for GrpcSifterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl GrpcSifterConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }

    /// Load settings from the environment
    ///
    /// - `SIFTER_TARGET` (default `localhost:50051`)
    /// - `SIFTER_CONNECT_TIMEOUT_MS` (optional)
    /// - `SIFTER_REQUEST_TIMEOUT_MS` (optional)
    ///
    /// # Errors
    ///
    /// Returns `SifterError::ConfigError` if a timeout is not a whole number of milliseconds
    pub fn from_env() -> Result<Self, SifterError> {
        let target = std::env::var("SIFTER_TARGET").unwrap_or_else(|_| DEFAULT_TARGET.to_string());

        Ok(Self {
            target,
            connect_timeout: parse_millis(
                "SIFTER_CONNECT_TIMEOUT_MS",
                std::env::var("SIFTER_CONNECT_TIMEOUT_MS").ok(),
            )?,
            request_timeout: parse_millis(
                "SIFTER_REQUEST_TIMEOUT_MS",
                std::env::var("SIFTER_REQUEST_TIMEOUT_MS").ok(),
            )?,
        })
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The URI the channel connects to
    ///
    /// A bare `host:port` gets an `http://` scheme: the channel is plaintext.
    ///
    /// # Errors
    ///
    /// Returns `SifterError::InvalidEndpoint` if the target is blank
    pub fn endpoint_uri(&self) -> Result<String, SifterError> {
        let target = self.target.trim();
        if target.is_empty() {
            return Err(SifterError::invalid_endpoint("target address is empty"));
        }

        if target.contains("://") {
            Ok(target.to_string())
        } else {
            Ok(format!("http://{}", target))
        }
    }
}

fn parse_millis(name: &str, value: Option<String>) -> Result<Option<Duration>, SifterError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|err| SifterError::config_error(format!("{} = '{}': {}", name, raw, err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let config = GrpcSifterConfig::default();
        assert_eq!(config.target, "localhost:50051");
        assert_eq!(config.endpoint_uri().unwrap(), "http://localhost:50051");
        assert!(config.connect_timeout.is_none());
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_explicit_scheme_is_kept() {
        let config = GrpcSifterConfig::new("http://sifter.chord.local:50051");
        assert_eq!(config.endpoint_uri().unwrap(), "http://sifter.chord.local:50051");
    }

    #[test]
    fn test_blank_target_is_invalid() {
        let err = GrpcSifterConfig::new("   ").endpoint_uri().unwrap_err();
        assert!(matches!(err, SifterError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_builders() {
        let config = GrpcSifterConfig::default()
            .with_target("10.0.0.5:6000")
            .with_connect_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_millis(500));

        assert_eq!(config.target, "10.0.0.5:6000");
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.request_timeout, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("X", None).unwrap(), None);
        assert_eq!(
            parse_millis("X", Some(" 250 ".to_string())).unwrap(),
            Some(Duration::from_millis(250))
        );

        let err = parse_millis("SIFTER_REQUEST_TIMEOUT_MS", Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, SifterError::ConfigError(_)));
        assert!(err.to_string().contains("SIFTER_REQUEST_TIMEOUT_MS"));
    }
}
