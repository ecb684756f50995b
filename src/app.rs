use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::domain::sweeper_config::SweeperConfig;
use crate::infrastructure::config::ConfigService;

/// Install the fmt subscriber. `RUST_LOG` wins over the `info` default, and
/// a second call is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Logging plus configuration, everything a host needs before handling
/// uploads.
pub fn bootstrap() -> Result<SweeperConfig> {
    init_logging();

    ConfigService::new().load().map_err(|err| {
        error!(error = %err, "Failed to load configuration");
        err
    })
}
