use crate::collectors::collector;
use crate::commands::{delete_after, Context, Error};
use crate::renderer::colours::Colours;
use crate::renderer::widgets;
use log::{debug, info};
use poise::serenity_prelude as serenity;
use poise::CreateReply;

/// See system stats on host
#[poise::command(slash_command, rename = "view-stats")]
pub async fn view_stats(ctx: Context<'_>) -> Result<(), Error> {
    info!("/view-stats requested by {}", ctx.author().name);
    // The CPU sample alone takes a second.
    ctx.defer_ephemeral().await?;

    let sources = ctx.data().config.stats.sources();
    let report = collector::collect_system_report(&sources).await;
    debug!("CPU usage since boot: {:.2}%", report.cpu_since_boot);

    let colours = Colours::default();
    let system_embed = serenity::CreateEmbed::new()
        .title("System Stats")
        .description(widgets::code_block(&widgets::render_system_table(&report)))
        .colour(serenity::Colour::new(colours.system));
    let disk_embed = serenity::CreateEmbed::new()
        .title("Disk Usage Stats")
        .description(widgets::code_block(&widgets::render_disk_table(&report.disks)))
        .colour(serenity::Colour::new(colours.disk));

    let reply = CreateReply::default()
        .embed(system_embed)
        .embed(disk_embed)
        .ephemeral(true);
    let handle = ctx.send(reply).await?;
    delete_after(ctx, handle).await;
    Ok(())
}
