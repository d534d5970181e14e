/// The example bot's commands.
use anyhow::Result;
use async_trait::async_trait;
use cmdhelper_commands::{CommandContext, CommandDef, CommandHandler, Outgoing};
use cmdhelper_discord::CommandHelper;

/// Echoes its arguments back; with none, falls through to the help listing.
struct SayHandler;

#[async_trait]
impl CommandHandler for SayHandler {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<()> {
        if ctx.invocation.arg_count() == 0 {
            return ctx.dispatcher.invoke_default(ctx).await;
        }
        ctx.reply(Outgoing::Text(ctx.invocation.args.join(" ")))
            .await
    }
}

struct PingHandler;

#[async_trait]
impl CommandHandler for PingHandler {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<()> {
        ctx.reply(Outgoing::Text("Pong!".to_string())).await
    }
}

/// Register every bot command on the helper.
pub async fn register_all(helper: &CommandHelper) -> Result<()> {
    let prefix = helper.prefix().await;
    helper
        .register_command(
            "say",
            CommandDef::new(SayHandler, format!("{prefix}say <text>"), "Say something"),
        )
        .await?;
    helper
        .register_command(
            "ping",
            CommandDef::new(PingHandler, format!("{prefix}ping"), "Liveness check"),
        )
        .await?;
    Ok(())
}
