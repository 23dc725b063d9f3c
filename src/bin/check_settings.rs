use anyhow::Context;
use statbot::config::AppConfig;
use statbot::settings;

/// Bootstrap the settings file without starting the bot.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Failed to load configuration")?;
    statbot::init_logging(config.get_log_level());

    let path = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| config.settings.file.clone());
    let status = settings::check_settings_file(&path).map_err(|e| {
        log::error!("Error managing settings file: {:#}", e);
        e
    })?;
    log::info!("{}: {:?}", path.display(), status);
    Ok(())
}
