use crate::models::StatSources;
use anyhow::{bail, Context, Result};
use config::{Config, File, FileFormat};
use log::{debug, error, LevelFilter};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the default `config.ini` location.
pub const CONFIG_PATH_ENV: &str = "STATBOT_CONFIG";
pub const TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";
pub const GUILD_ID_ENV: &str = "DISCORD_GUILD_ID";

fn default_reply_ttl() -> u64 {
    30
}

fn default_settings_file() -> PathBuf {
    PathBuf::from("/config/settings.json")
}

fn default_meminfo() -> PathBuf {
    StatSources::default().meminfo
}

fn default_stat() -> PathBuf {
    StatSources::default().stat
}

fn default_uptime() -> PathBuf {
    StatSources::default().uptime
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscordConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub guild_id: Option<u64>,
    /// Seconds before an ephemeral reply is deleted.
    #[serde(default = "default_reply_ttl")]
    pub reply_ttl: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    #[serde(default = "default_settings_file")]
    pub file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatsConfig {
    #[serde(default = "default_meminfo")]
    pub meminfo: PathBuf,
    #[serde(default = "default_stat")]
    pub stat: PathBuf,
    #[serde(default = "default_uptime")]
    pub uptime: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: None,
            guild_id: None,
            reply_ttl: default_reply_ttl(),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            file: default_settings_file(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            meminfo: default_meminfo(),
            stat: default_stat(),
            uptime: default_uptime(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl StatsConfig {
    pub fn sources(&self) -> StatSources {
        StatSources {
            meminfo: self.meminfo.clone(),
            stat: self.stat.clone(),
            uptime: self.uptime.clone(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.ini".to_string());
        Self::from_file(path)
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    /// Load `path` if it exists, then let the Discord environment variables
    /// override whatever the file says.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Ini).required(false))
            .set_override_option("discord.token", env::var(TOKEN_ENV).ok())?
            .set_override_option("discord.guild_id", env::var(GUILD_ID_ENV).ok())?
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    /// The token and guild id the bot cannot start without.
    pub fn validate(&self) -> Result<(&str, u64)> {
        let Some(token) = self.discord.token.as_deref().filter(|t| !t.is_empty()) else {
            error!("{} is not set in the environment variables", TOKEN_ENV);
            bail!("{} is required to run the bot", TOKEN_ENV);
        };
        let Some(guild_id) = self.discord.guild_id else {
            error!("{} is not set in the environment variables", GUILD_ID_ENV);
            bail!("{} is required to run the bot", GUILD_ID_ENV);
        };
        Ok((token, guild_id))
    }
}
