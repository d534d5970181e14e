mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use cmdhelper_discord::CommandHelper;

use config::Config;

#[derive(Parser)]
#[command(name = "cmdhelper-bot")]
#[command(about = "Example Discord bot built on the cmdhelper dispatcher")]
#[command(version)]
struct Cli {
    /// Command prefix override
    #[arg(short, long)]
    prefix: Option<String>,
    /// Discord bot token override
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    let config = config.with_overrides(cli.prefix, cli.token);

    run_bot(config).await
}

async fn run_bot(config: Config) -> Result<()> {
    let token = config.discord_token.context("DISCORD_TOKEN is not set")?;

    info!(prefix = %config.prefix, "Starting bot");

    let mut helper = CommandHelper::new(config.prefix, &token).await?;
    commands::register_all(&helper).await?;

    tokio::select! {
        result = helper.open() => {
            if let Err(why) = result {
                error!("Client error: {:?}", why);
                anyhow::bail!("Discord client error: {:?}", why);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}
