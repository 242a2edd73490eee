pub mod app;
pub mod seeding;

pub use app::AppConfig;
pub use seeding::DemoSeeder;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize tracing. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
