/// Gateway event proxy: adapts serenity events into dispatcher calls.
use async_trait::async_trait;
use cmdhelper_commands::{CommandDispatcher, MessageEvent};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

use crate::outbound::DiscordOutbound;

/// Registered as the serenity event handler. Forwards every message event to
/// the dispatcher; gating (prefix, automated senders) is the dispatcher's
/// job, not the proxy's.
pub struct EventProxy {
    dispatcher: Arc<CommandDispatcher>,
}

impl EventProxy {
    pub fn new(dispatcher: Arc<CommandDispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Lift the fields the dispatcher cares about out of a gateway message.
pub fn message_event(msg: &Message) -> MessageEvent {
    MessageEvent {
        channel_id: msg.channel_id.to_string(),
        sender_id: msg.author.id.to_string(),
        sender_name: msg.author.name.clone(),
        sender_is_bot: msg.author.bot,
        content: msg.content.clone(),
    }
}

#[async_trait]
impl EventHandler for EventProxy {
    async fn message(&self, ctx: Context, msg: Message) {
        let event = message_event(&msg);
        let outbound = DiscordOutbound::new(ctx.http.clone());
        // An event callback has no caller to surface errors to.
        if let Err(e) = self.dispatcher.dispatch(&outbound, &event).await {
            error!(
                "Command handler error in channel {}: {:?}",
                event.channel_id, e
            );
        }
    }

    async fn ready(&self, _: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}
