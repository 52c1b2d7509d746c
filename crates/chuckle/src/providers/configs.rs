use std::time::Duration;

pub const CHUCK_NORRIS_HOST: &str = "https://api.chucknorris.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Unified enum to wrap different provider configurations
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Builtin(BuiltinProviderConfig),
    Remote(RemoteProviderConfig),
}

#[derive(Debug, Clone, Default)]
pub struct BuiltinProviderConfig;

#[derive(Debug, Clone)]
pub struct RemoteProviderConfig {
    pub host: String,
    pub timeout: Duration,
}

impl Default for RemoteProviderConfig {
    fn default() -> Self {
        Self {
            host: CHUCK_NORRIS_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
