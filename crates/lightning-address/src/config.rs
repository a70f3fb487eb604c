//! Configuration types for lightning-address.

use std::env;
use std::time::Duration;

use crate::error::{LnAddressError, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the LNURL-pay HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Timeout applied to each of the two HTTP requests.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Use `http://` for discovery, for local or regtest LNURL services.
    pub allow_http: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_allow_http(mut self, allow_http: bool) -> Self {
        self.allow_http = allow_http;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LNADDR_HTTP_TIMEOUT_SECS` | Per-request timeout in seconds | `10` |
    /// | `LNADDR_USER_AGENT` | User-Agent header | `ln-invoice/<version>` |
    /// | `LNADDR_ALLOW_HTTP` | Plain HTTP discovery | `false` |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(secs) = lookup("LNADDR_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                LnAddressError::Config(format!(
                    "LNADDR_HTTP_TIMEOUT_SECS must be an integer, got '{}'",
                    secs
                ))
            })?;
            if secs == 0 {
                return Err(LnAddressError::Config(
                    "LNADDR_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(user_agent) = lookup("LNADDR_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Some(val) = lookup("LNADDR_ALLOW_HTTP") {
            config.allow_http = match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" | "" => false,
                other => {
                    return Err(LnAddressError::Config(format!(
                        "LNADDR_ALLOW_HTTP must be true or false, got '{}'",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ln-invoice/{}", env!("CARGO_PKG_VERSION")),
            allow_http: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("ln-invoice/"));
        assert!(!config.allow_http);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("test-agent")
            .with_allow_http(true);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "test-agent");
        assert!(config.allow_http);
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("LNADDR_HTTP_TIMEOUT_SECS", "25"),
            ("LNADDR_USER_AGENT", "custom/1.0"),
            ("LNADDR_ALLOW_HTTP", "YES"),
        ]))
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(25));
        assert_eq!(config.user_agent, "custom/1.0");
        assert!(config.allow_http);
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        for vars in [
            [("LNADDR_HTTP_TIMEOUT_SECS", "ten")],
            [("LNADDR_HTTP_TIMEOUT_SECS", "0")],
            [("LNADDR_ALLOW_HTTP", "maybe")],
        ] {
            let err = ClientConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, LnAddressError::Config(_)));
        }
    }
}
