use anyhow::Context;
use log::error;
use statbot::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing config.ini means defaults, a malformed one is fatal
    let config = AppConfig::new().context("Failed to load configuration")?;

    statbot::init_logging(config.get_log_level());

    if let Err(e) = statbot::run(config).await {
        error!("Application error: {}", e);
        return Err(e);
    }
    Ok(())
}
