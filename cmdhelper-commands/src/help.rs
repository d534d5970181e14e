/// Built-in default handler: replies with an embed listing every command.
use anyhow::Result;
use async_trait::async_trait;

use crate::dispatch::{CommandContext, CommandHandler};
use crate::types::{EmbedField, EmbedMessage, Outgoing};

/// Replies to any unmatched command with a "Help" embed, one field per
/// registered command. Installed as the default handler by
/// [`CommandDispatcher::new`](crate::dispatch::CommandDispatcher::new);
/// replaceable via `set_default_handler`.
pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<()> {
        let mut entries = ctx.dispatcher.help_entries().await;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let fields = entries
            .into_iter()
            .map(|entry| EmbedField {
                name: entry.name,
                value: format!("{} (Usage: {})", entry.description, entry.usage),
            })
            .collect();

        ctx.reply(Outgoing::Embed(EmbedMessage {
            title: "Help".to_string(),
            fields,
        }))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{CommandDispatcher, Outbound};
    use crate::registry::OverridePolicy;
    use crate::types::{CommandDef, MessageEvent};
    use tokio::sync::Mutex;

    struct NoopHandler;

    #[async_trait]
    impl CommandHandler for NoopHandler {
        async fn handle(&self, _ctx: &CommandContext<'_>) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOutbound {
        sent: Mutex<Vec<(String, Outgoing)>>,
    }

    #[async_trait]
    impl Outbound for RecordingOutbound {
        async fn send(&self, channel_id: &str, message: Outgoing) -> Result<()> {
            self.sent.lock().await.push((channel_id.to_string(), message));
            Ok(())
        }
    }

    fn event(content: &str) -> MessageEvent {
        MessageEvent {
            channel_id: "chan-9".to_string(),
            sender_id: "user-1".to_string(),
            sender_name: "user".to_string(),
            sender_is_bot: false,
            content: content.to_string(),
        }
    }

    async fn register(dispatcher: &CommandDispatcher, name: &str, usage: &str, description: &str) {
        dispatcher
            .registry()
            .register(
                name,
                CommandDef::new(NoopHandler, usage, description),
                OverridePolicy::Reject,
            )
            .await
            .unwrap();
    }

    async fn help_embed(outbound: &RecordingOutbound) -> EmbedMessage {
        let mut sent = outbound.sent.lock().await;
        assert_eq!(sent.len(), 1);
        let (channel, message) = sent.pop().unwrap();
        assert_eq!(channel, "chan-9");
        match message {
            Outgoing::Embed(embed) => embed,
            other => panic!("expected an embed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lists_every_registered_command() {
        let dispatcher = CommandDispatcher::new("!");
        register(&dispatcher, "say", "!say <text>", "Say something").await;
        register(&dispatcher, "roll", "!roll <dice>", "Roll dice").await;

        let outbound = RecordingOutbound::default();
        dispatcher.dispatch(&outbound, &event("!help")).await.unwrap();

        let embed = help_embed(&outbound).await;
        assert_eq!(embed.title, "Help");
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].name, "!roll");
        assert_eq!(embed.fields[0].value, "Roll dice (Usage: !roll <dice>)");
        assert_eq!(embed.fields[1].name, "!say");
        assert_eq!(embed.fields[1].value, "Say something (Usage: !say <text>)");
    }

    #[tokio::test]
    async fn empty_registry_yields_an_embed_with_no_fields() {
        let dispatcher = CommandDispatcher::new("!");

        let outbound = RecordingOutbound::default();
        dispatcher.dispatch(&outbound, &event("!anything")).await.unwrap();

        let embed = help_embed(&outbound).await;
        assert_eq!(embed.title, "Help");
        assert!(embed.fields.is_empty());
    }

    #[tokio::test]
    async fn listing_reflects_the_current_prefix() {
        let dispatcher = CommandDispatcher::new("!");
        register(&dispatcher, "say", "say <text>", "Say something").await;
        dispatcher.set_prefix("?").await;

        let outbound = RecordingOutbound::default();
        dispatcher.dispatch(&outbound, &event("?help")).await.unwrap();

        let embed = help_embed(&outbound).await;
        assert_eq!(embed.fields[0].name, "?say");
    }
}
