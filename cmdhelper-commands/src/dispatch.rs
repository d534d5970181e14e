/// Message dispatch: prefix/sender gates, registry lookup, handler invocation.
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::help::HelpHandler;
use crate::registry::CommandRegistry;
use crate::tokenize::tokenize;
use crate::types::{HelpEntry, Invocation, MessageEvent, Outgoing};

// ---------------------------------------------------------------------------
// Outbound trait
// ---------------------------------------------------------------------------

/// The sending half of the chat client: deliver a message body to a channel.
///
/// The dispatcher never constructs one of these; the platform binding hands
/// one in per event.
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn send(&self, channel_id: &str, message: Outgoing) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Handler trait
// ---------------------------------------------------------------------------

/// Context passed to every command handler.
pub struct CommandContext<'a> {
    /// The dispatcher that routed this event; handlers use it to read the
    /// prefix, re-tokenize, or fall through to the default handler.
    pub dispatcher: &'a CommandDispatcher,
    /// The inbound event being handled.
    pub event: &'a MessageEvent,
    /// Tokenized command word and arguments.
    pub invocation: Invocation,
    /// Send handle for replies.
    pub outbound: &'a dyn Outbound,
}

impl CommandContext<'_> {
    /// Send `message` to the channel the event originated from.
    pub async fn reply(&self, message: Outgoing) -> Result<()> {
        self.outbound.send(&self.event.channel_id, message).await
    }
}

/// A command implementation: one invocation method.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, ctx: &CommandContext<'_>) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes inbound message events to registered command handlers.
///
/// Owns the registry, the prefix, and the replaceable default handler. All
/// shared state sits behind its own guard; no lock is held while a handler
/// runs.
pub struct CommandDispatcher {
    registry: CommandRegistry,
    prefix: RwLock<String>,
    default_handler: RwLock<Arc<dyn CommandHandler>>,
}

impl CommandDispatcher {
    /// Build a dispatcher with an empty registry and [`HelpHandler`] as the
    /// default.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: RwLock::new(prefix.into()),
            default_handler: RwLock::new(Arc::new(HelpHandler)),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The current command prefix.
    pub async fn prefix(&self) -> String {
        self.prefix.read().await.clone()
    }

    /// Change the prefix. Applies to events processed after this call;
    /// nothing is reprocessed retroactively.
    pub async fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        info!(prefix = %prefix, "prefix changed");
        *self.prefix.write().await = prefix;
    }

    /// Replace the fallback handler invoked when no command matches.
    pub async fn set_default_handler(&self, handler: Arc<dyn CommandHandler>) {
        *self.default_handler.write().await = handler;
    }

    /// The current default handler.
    pub async fn default_handler(&self) -> Arc<dyn CommandHandler> {
        self.default_handler.read().await.clone()
    }

    /// Invoke the current default handler with an existing context. Command
    /// handlers call this to fall through to the help listing.
    pub async fn invoke_default(&self, ctx: &CommandContext<'_>) -> Result<()> {
        let handler = self.default_handler().await;
        handler.handle(ctx).await
    }

    /// Tokenize `content` against the current prefix.
    pub async fn tokenize(&self, content: &str) -> Invocation {
        let prefix = self.prefix().await;
        tokenize(content, &prefix)
    }

    /// The help listing: one entry per registered command, prefixed with the
    /// current prefix, in no particular order.
    pub async fn help_entries(&self) -> Vec<HelpEntry> {
        let prefix = self.prefix().await;
        self.registry
            .snapshot()
            .await
            .into_iter()
            .map(|(name, def)| HelpEntry {
                name: format!("{prefix}{name}"),
                usage: def.usage.clone(),
                description: def.description.clone(),
            })
            .collect()
    }

    /// Process one inbound message event.
    ///
    /// The prefix is read once at entry, so a concurrent `set_prefix` only
    /// affects later events. Messages without the prefix, messages from
    /// automated senders, and prefix-only messages are ignored. A known
    /// command runs its handler; anything else runs the default handler.
    /// Handler errors propagate to the caller.
    pub async fn dispatch(&self, outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
        let prefix = self.prefix().await;
        if !event.content.starts_with(prefix.as_str()) {
            return Ok(());
        }
        if event.sender_is_bot {
            debug!(sender = %event.sender_id, "ignoring automated sender");
            return Ok(());
        }

        let invocation = tokenize(&event.content, &prefix);
        if invocation.command.is_empty() {
            debug!(channel = %event.channel_id, "prefix-only message, ignoring");
            return Ok(());
        }

        let target = self.registry.lookup(&invocation.command).await;
        let ctx = CommandContext {
            dispatcher: self,
            event,
            invocation,
            outbound,
        };

        match target {
            Some(def) => {
                info!(
                    command = %ctx.invocation.command,
                    sender = %event.sender_name,
                    channel = %event.channel_id,
                    "dispatching command"
                );
                def.handler.handle(&ctx).await
            }
            None => {
                debug!(command = %ctx.invocation.command, "unknown command, running default handler");
                self.invoke_default(&ctx).await
            }
        }
    }
}
