/// Top-level helper: a command dispatcher wired onto a Discord client.
use cmdhelper_commands::{
    CommandDef, CommandDispatcher, CommandHandler, CommandToken, Invocation, OverridePolicy,
    RegistryError,
};
use serenity::client::ClientBuilder;
use serenity::model::channel::Message;
use serenity::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::events::EventProxy;

/// Gateway intents the helper subscribes with by default: guild and direct
/// messages, with message content.
pub fn default_intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Owns the client and the dispatcher. Registration and configuration go
/// through the passthroughs below (or [`CommandHelper::dispatcher`] for
/// anything else); [`CommandHelper::open`] runs the connection.
pub struct CommandHelper {
    dispatcher: Arc<CommandDispatcher>,
    client: Client,
}

impl CommandHelper {
    /// Build a helper over a fresh client authenticated with `token`,
    /// subscribed with [`default_intents`].
    pub async fn new(prefix: impl Into<String>, token: impl AsRef<str>) -> serenity::Result<Self> {
        Self::from_builder(prefix, Client::builder(token, default_intents())).await
    }

    /// Wire the dispatcher onto a caller-supplied client configuration. Use
    /// this to pick different intents or stack extra event handlers.
    pub async fn from_builder(
        prefix: impl Into<String>,
        builder: ClientBuilder,
    ) -> serenity::Result<Self> {
        let dispatcher = Arc::new(CommandDispatcher::new(prefix));
        let client = builder
            .event_handler(EventProxy::new(dispatcher.clone()))
            .await?;
        Ok(Self { dispatcher, client })
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Connect to the gateway and process events until the client stops.
    pub async fn open(&mut self) -> serenity::Result<()> {
        info!("Starting Discord command helper");
        self.client.start().await
    }

    // -----------------------------------------------------------------------
    // Registration passthroughs
    // -----------------------------------------------------------------------

    /// Register `name`, rejecting the call if the name is already taken.
    pub async fn register_command(
        &self,
        name: &str,
        def: CommandDef,
    ) -> Result<CommandToken, RegistryError> {
        self.dispatcher
            .registry()
            .register(name, def, OverridePolicy::Reject)
            .await
    }

    /// Register `name`, replacing any existing entry.
    pub async fn register_command_override(
        &self,
        name: &str,
        def: CommandDef,
    ) -> Result<CommandToken, RegistryError> {
        self.dispatcher
            .registry()
            .register(name, def, OverridePolicy::Replace)
            .await
    }

    /// Register every entry or none: the first empty or occupied name fails
    /// the whole batch.
    pub async fn register_commands(
        &self,
        batch: HashMap<String, CommandDef>,
    ) -> Result<HashMap<String, CommandToken>, RegistryError> {
        self.dispatcher
            .registry()
            .register_batch(batch, OverridePolicy::Reject)
            .await
    }

    /// Batch registration that replaces occupied names instead of failing.
    pub async fn register_commands_override(
        &self,
        batch: HashMap<String, CommandDef>,
    ) -> Result<HashMap<String, CommandToken>, RegistryError> {
        self.dispatcher
            .registry()
            .register_batch(batch, OverridePolicy::Replace)
            .await
    }

    /// Register one handler record under several names, atomically.
    pub async fn register_aliases(
        &self,
        names: &[&str],
        def: CommandDef,
    ) -> Result<HashMap<String, CommandToken>, RegistryError> {
        let batch = names
            .iter()
            .map(|name| (name.to_string(), def.clone()))
            .collect();
        self.dispatcher
            .registry()
            .register_batch(batch, OverridePolicy::Reject)
            .await
    }

    /// Remove the registration the token was issued for.
    pub async fn deregister(&self, token: CommandToken) {
        self.dispatcher.registry().deregister(token).await;
    }

    // -----------------------------------------------------------------------
    // Configuration passthroughs
    // -----------------------------------------------------------------------

    pub async fn prefix(&self) -> String {
        self.dispatcher.prefix().await
    }

    /// Change the prefix for events processed from now on.
    pub async fn set_prefix(&self, prefix: impl Into<String>) {
        self.dispatcher.set_prefix(prefix).await;
    }

    /// Replace the fallback handler run when no command matches.
    pub async fn set_default_handler(&self, handler: Arc<dyn CommandHandler>) {
        self.dispatcher.set_default_handler(handler).await;
    }

    /// Tokenize a gateway message against the current prefix.
    pub async fn command_args(&self, msg: &Message) -> Invocation {
        self.dispatcher.tokenize(&msg.content).await
    }
}
