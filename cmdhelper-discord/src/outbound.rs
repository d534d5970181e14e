/// Outbound sends over the Discord REST API.
use anyhow::{Context, Result};
use async_trait::async_trait;
use cmdhelper_commands::{Outbound, Outgoing};
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::num::NonZeroU64;
use std::sync::Arc;

use crate::embeds::build_embed;

/// [`Outbound`] implementation over serenity's HTTP client. One is built per
/// inbound event from the gateway context, so replies reuse the connection
/// pool of the running client.
pub struct DiscordOutbound {
    http: Arc<Http>,
}

impl DiscordOutbound {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Outbound for DiscordOutbound {
    async fn send(&self, channel_id: &str, message: Outgoing) -> Result<()> {
        let channel = parse_channel_id(channel_id)?;
        match message {
            Outgoing::Text(text) => {
                channel
                    .say(&self.http, text)
                    .await
                    .context("Failed to send message")?;
            }
            Outgoing::Embed(embed) => {
                channel
                    .send_message(&self.http, CreateMessage::new().embed(build_embed(embed)))
                    .await
                    .context("Failed to send embed")?;
            }
        }
        Ok(())
    }
}

/// Channel ids cross the dispatcher boundary as strings; Discord ids are
/// non-zero u64s, so parse through `NonZeroU64` rather than panicking in
/// `ChannelId::new`.
fn parse_channel_id(raw: &str) -> Result<ChannelId> {
    let id: NonZeroU64 = raw
        .parse()
        .with_context(|| format!("Invalid Discord channel id `{raw}`"))?;
    Ok(ChannelId::new(id.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_numeric_channel_id() {
        let channel = parse_channel_id("1234567890").unwrap();
        assert_eq!(channel.get(), 1234567890);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_channel_id("0").is_err());
        assert!(parse_channel_id("not-a-number").is_err());
        assert!(parse_channel_id("").is_err());
    }
}
