pub mod collectors;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod renderer;
pub mod settings;

mod utils;

use crate::commands::{Data, Error};
use crate::config::AppConfig;
use crate::settings::Settings;
use anyhow::Context;
use env_logger::{Builder, WriteStyle};
use log::{error, info, LevelFilter};
use poise::serenity_prelude as serenity;
use std::io::Write;

/// `2024-01-31 12:00:00 - INFO - message` on stderr.
pub fn init_logging(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Always)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting Discord bot...");

    tokio::select! {
        result = start_bot(config) => {
            match result {
                Ok(_) => info!("Bot stopped"),
                Err(e) => {
                    error!("Application error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e).context("Application failed to run");
                }
            }
        }
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }

    Ok(())
}

async fn start_bot(config: AppConfig) -> anyhow::Result<()> {
    let (token, guild_id) = config.validate()?;
    let token = token.to_string();
    let guild_id = serenity::GuildId::new(guild_id);

    settings::check_settings_file(&config.settings.file)
        .context("Error managing settings file")?;
    let settings = Settings::load(&config.settings.file)?;
    info!(
        "Loaded settings: {} admin(s), {} allowed role(s)",
        settings.admin_ids.len(),
        settings.allowed_roles.len()
    );

    let options = poise::FrameworkOptions {
        commands: commands::all(),
        owners: commands::owners(&settings),
        command_check: Some(|ctx| Box::pin(commands::check_allowed(ctx))),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    };

    let data = Data { config, settings };
    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot is ready and logged in as {}", ready.user.name);
                let commands = &framework.options().commands;
                match poise::builtins::register_in_guild(ctx, commands, guild_id).await {
                    Ok(()) => info!("Synced {} commands", commands.len()),
                    Err(e) => error!("Error syncing commands: {}", e),
                }
                Ok(data)
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Failed to create Discord client")?;

    client.start().await.context("Discord client stopped")?;
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {}", error)
        }
        error => {
            if let poise::FrameworkError::Command { error, ctx, .. } = &error {
                error!("Error in command /{}: {}", ctx.command().name, error);
            }
            // Replies to the user where the error has an interaction attached.
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e)
            }
        }
    }
}
