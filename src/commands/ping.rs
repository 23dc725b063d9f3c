use crate::commands::{delete_after, Context, Error};
use poise::serenity_prelude::Mentionable;
use poise::CreateReply;

/// Ping the bot to check if it is online
#[poise::command(slash_command)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let reply = CreateReply::default()
        .content(format!("{} Pong!", ctx.author().mention()))
        .ephemeral(true);
    let handle = ctx.send(reply).await?;
    delete_after(ctx, handle).await;
    Ok(())
}
