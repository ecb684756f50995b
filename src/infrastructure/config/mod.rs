use figment::providers::{Env, Serialized};
use figment::Figment;

use crate::domain::error::{AppError, Result};
use crate::domain::sweeper_config::SweeperConfig;

pub const ENV_PREFIX: &str = "DATA_SWEEPER_";

/// Resolves `SweeperConfig` from built-in defaults overlaid with
/// `DATA_SWEEPER_*` environment variables. No file is read.
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::from_figment(
            Figment::from(Serialized::defaults(SweeperConfig::default()))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn load(&self) -> Result<SweeperConfig> {
        let config: SweeperConfig = self
            .figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate().map_err(AppError::ConfigError)?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
