use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000"); falls back to the Leptos site address
    pub listen: Option<String>,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - PORTFOLIO_LISTEN
    /// - PORTFOLIO_SOCKET
    /// - PORTFOLIO_OTEL_ENDPOINT
    /// - PORTFOLIO_OTEL_ENVIRONMENT
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its field.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("PORTFOLIO_").split("_"))
            .extract()
    }

    /// The TCP address to bind, preferring `listen` over the Leptos default
    ///
    /// # Errors
    ///
    /// Returns an error if `listen` is not a socket address.
    pub fn listen_addr(&self, site_addr: SocketAddr) -> Result<SocketAddr, std::net::AddrParseError> {
        match &self.listen {
            Some(listen) => listen.parse(),
            None => Ok(site_addr),
        }
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Default, Serialize)]
struct ConfigDefaults {
    otel: OtelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load()?;
            assert!(config.listen.is_none());
            assert!(config.socket.is_none());
            assert_eq!(config.otel.endpoint, "http://127.0.0.1:4318");
            assert_eq!(config.otel.environment, "development");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "0.0.0.0:8080");
            jail.set_env("PORTFOLIO_OTEL_ENVIRONMENT", "production");

            let config = Config::load()?;
            assert_eq!(config.listen.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(config.otel.environment, "production");
            assert_eq!(config.otel.endpoint, "http://127.0.0.1:4318");
            Ok(())
        });
    }

    #[test]
    fn test_build_time_vars_are_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_EMAILJS_SERVICE_ID", "service_abc");
            jail.set_env("PORTFOLIO_CONTACT_EMAIL", "owner@example.com");

            let config = Config::load()?;
            assert!(config.listen.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_listen_addr() {
        let site: SocketAddr = "127.0.0.1:3000".parse().unwrap();

        let mut config = Config {
            listen: None,
            socket: None,
            otel: OtelConfig::default(),
        };
        assert_eq!(config.listen_addr(site).unwrap(), site);

        config.listen = Some("0.0.0.0:8080".to_string());
        assert_eq!(config.listen_addr(site).unwrap().port(), 8080);

        config.listen = Some("not an address".to_string());
        assert!(config.listen_addr(site).is_err());
    }
}
