use super::{
    base::JokeProvider, builtin::BuiltinProvider, configs::ProviderConfig,
    remote::RemoteProvider,
};
use anyhow::Result;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderType {
    Builtin,
    Remote,
}

impl ProviderConfig {
    pub fn provider_type(&self) -> ProviderType {
        match self {
            ProviderConfig::Builtin(_) => ProviderType::Builtin,
            ProviderConfig::Remote(_) => ProviderType::Remote,
        }
    }
}

pub fn get_provider(config: ProviderConfig) -> Result<Box<dyn JokeProvider + Send + Sync>> {
    tracing::debug!(provider = %config.provider_type(), "creating joke provider");
    match config {
        ProviderConfig::Builtin(builtin_config) => {
            Ok(Box::new(BuiltinProvider::new(builtin_config)?))
        }
        ProviderConfig::Remote(remote_config) => Ok(Box::new(RemoteProvider::new(remote_config)?)),
    }
}
