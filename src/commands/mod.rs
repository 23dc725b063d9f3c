use crate::config::AppConfig;
use crate::settings::Settings;
use log::{error, warn};
use poise::serenity_prelude as serenity;
use std::time::Duration;

pub mod ping;
pub mod stats;

/// Shared state handed to every command.
pub struct Data {
    pub config: AppConfig,
    pub settings: Settings,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![ping::ping(), stats::view_stats()]
}

/// Runs before every command. An empty `AllowedRoles` list lets everyone in.
pub async fn check_allowed(ctx: Context<'_>) -> Result<bool, Error> {
    let settings = &ctx.data().settings;
    let author = ctx.author().id.get();
    if settings.allowed_roles.is_empty() || settings.admin_ids.contains(&author) {
        return Ok(true);
    }

    let Some(member) = ctx.author_member().await else {
        warn!("No member for {} outside a guild, denying", author);
        return Ok(false);
    };
    let allowed = member
        .roles
        .iter()
        .any(|role| settings.allowed_roles.contains(&role.get()));
    if !allowed {
        warn!("{} lacks an allowed role for /{}", author, ctx.command().name);
    }
    Ok(allowed)
}

/// Delete an ephemeral reply once the configured TTL runs out. Only this
/// command's task waits, other interactions keep being served.
pub(crate) async fn delete_after(ctx: Context<'_>, reply: poise::ReplyHandle<'_>) {
    let ttl = ctx.data().config.discord.reply_ttl;
    if ttl == 0 {
        return;
    }
    tokio::time::sleep(Duration::from_secs(ttl)).await;
    if let Err(e) = reply.delete(ctx).await {
        error!("Failed to delete reply for /{}: {}", ctx.command().name, e);
    }
}

pub fn owners(settings: &Settings) -> std::collections::HashSet<serenity::UserId> {
    settings
        .admin_ids
        .iter()
        .filter(|id| **id != 0)
        .map(|id| serenity::UserId::new(*id))
        .collect()
}
