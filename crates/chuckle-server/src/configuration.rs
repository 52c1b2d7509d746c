use crate::error::ConfigError;
use chuckle::providers::configs::{
    BuiltinProviderConfig, ProviderConfig, RemoteProviderConfig, CHUCK_NORRIS_HOST,
    DEFAULT_TIMEOUT,
};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum ProviderSettings {
    Builtin {},
    Remote {
        #[serde(default = "default_remote_host")]
        host: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl ProviderSettings {
    // Convert to the chuckle ProviderConfig
    pub fn into_config(self) -> ProviderConfig {
        match self {
            ProviderSettings::Builtin {} => ProviderConfig::Builtin(BuiltinProviderConfig),
            ProviderSettings::Remote { host, timeout_secs } => {
                ProviderConfig::Remote(RemoteProviderConfig {
                    host,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub provider: ProviderSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("provider.type", "builtin")?
            .add_source(
                Environment::with_prefix("CHUCKLE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Other(err)
        })
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_remote_host() -> String {
    CHUCK_NORRIS_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("CHUCKLE_") {
                env::remove_var(&key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert!(matches!(settings.provider, ProviderSettings::Builtin {}));
        assert!(matches!(
            settings.provider.into_config(),
            ProviderConfig::Builtin(_)
        ));
    }

    #[test]
    #[serial]
    fn test_remote_settings() {
        clean_env();
        env::set_var("CHUCKLE_PROVIDER__TYPE", "remote");
        env::set_var("CHUCKLE_PROVIDER__HOST", "http://jokes.internal:8080");
        env::set_var("CHUCKLE_PROVIDER__TIMEOUT_SECS", "5");

        let settings = Settings::new().unwrap();
        if let ProviderConfig::Remote(config) = settings.provider.into_config() {
            assert_eq!(config.host, "http://jokes.internal:8080");
            assert_eq!(config.timeout, Duration::from_secs(5));
        } else {
            panic!("Expected remote provider");
        }

        clean_env();
    }

    #[test]
    #[serial]
    fn test_remote_defaults() {
        clean_env();
        env::set_var("CHUCKLE_PROVIDER__TYPE", "remote");

        let settings = Settings::new().unwrap();
        if let ProviderSettings::Remote { host, timeout_secs } = settings.provider {
            assert_eq!(host, "https://api.chucknorris.io");
            assert_eq!(timeout_secs, 30);
        } else {
            panic!("Expected remote provider");
        }

        clean_env();
    }

    #[test]
    #[serial]
    fn test_server_settings_from_env() {
        clean_env();
        env::set_var("CHUCKLE_SERVER__HOST", "0.0.0.0");
        env::set_var("CHUCKLE_SERVER__PORT", "8080");

        let settings = Settings::new().unwrap();
        assert_eq!(
            settings.server.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );

        clean_env();
    }

    #[test]
    #[serial]
    fn test_ipv6_server_host() {
        clean_env();
        env::set_var("CHUCKLE_SERVER__HOST", "::1");
        env::set_var("CHUCKLE_SERVER__PORT", "8443");

        let settings = Settings::new().unwrap();
        assert_eq!(
            settings.server.socket_addr().unwrap(),
            "[::1]:8443".parse::<SocketAddr>().unwrap()
        );

        clean_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clean_env();
        env::set_var("CHUCKLE_SERVER__PORT", "not-a-port");

        let err = Settings::new().unwrap_err();
        assert!(matches!(err, ConfigError::Other(_)));

        clean_env();
    }

    #[test]
    #[serial]
    fn test_unknown_provider_type() {
        clean_env();
        env::set_var("CHUCKLE_PROVIDER__TYPE", "carrier-pigeon");

        let err = Settings::new().unwrap_err();
        assert!(matches!(err, ConfigError::Other(_)));

        clean_env();
    }
}
